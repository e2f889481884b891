//! Small widget set shared by the dashboard views.

mod button;
pub use button::{Button, ButtonVariant};

mod input;
pub use input::{Input, Label};

mod modal;
pub use modal::ModalOverlay;

mod confirm_dialog;
pub use confirm_dialog::ConfirmDialog;

mod search_box;
pub use search_box::SearchBox;

mod pagination;
pub use pagination::Pagination;

mod stat_card;
pub use stat_card::StatCard;

mod spinner;
pub use spinner::Spinner;

mod toast;
pub use toast::{
    show_error, show_success, use_toasts, Toast, ToastKind, ToastProvider, ToastStack,
};
