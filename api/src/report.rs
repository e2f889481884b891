//! # Report builders
//!
//! Pure transforms of the in-memory collections into downloadable documents.
//! Nothing here performs I/O; the UI decides what to do with the strings.
//!
//! Two document kinds:
//!
//! - [`TableReport`] — a titled, timestamped table encoded as CSV. One
//!   constructor per collection, with the same fixed column sets the admin
//!   screens print.
//! - [`transaction_receipt_html`] — the styled per-transaction receipt,
//!   used both as the body of the receipt email and as the per-row
//!   download on the transactions screen.

use chrono::{DateTime, Utc};

use crate::models::{NotificationTemplate, Restaurant, Transaction, User};

/// A titled tabular report with a generation timestamp.
#[derive(Clone, Debug, PartialEq)]
pub struct TableReport {
    pub title: String,
    pub generated_at: DateTime<Utc>,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl TableReport {
    pub fn new(title: &str, headers: &[&str]) -> Self {
        Self {
            title: title.to_string(),
            generated_at: Utc::now(),
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// Encode as CSV: title line, generation line, blank line, header row,
    /// then one row per record.
    pub fn to_csv(&self) -> String {
        let mut out = String::new();
        out.push_str(&csv_line(std::slice::from_ref(&self.title)));
        out.push_str(&csv_line(&[format!(
            "Generated on: {}",
            self.generated_at.format("%Y-%m-%d")
        )]));
        out.push('\n');
        out.push_str(&csv_line(&self.headers));
        for row in &self.rows {
            out.push_str(&csv_line(row));
        }
        out
    }

    /// The full user collection, one row per account.
    pub fn users(users: &[User]) -> Self {
        let mut report = Self::new(
            "User Management Report",
            &["Name", "Email", "Phone", "Role", "Status"],
        );
        for user in users {
            report.push_row(vec![
                user.name.clone(),
                user.email.clone(),
                user.phone.clone(),
                user.role.label().to_string(),
                verified_label(user.verified).to_string(),
            ]);
        }
        report
    }

    pub fn restaurants(restaurants: &[Restaurant]) -> Self {
        let mut report = Self::new(
            "Restaurant Management Report",
            &["Name", "Location", "Rating", "Status", "Created"],
        );
        for restaurant in restaurants {
            report.push_row(vec![
                restaurant.name.clone(),
                restaurant.location.clone(),
                format!("{:.1}", restaurant.rating),
                verified_label(restaurant.verified).to_string(),
                restaurant.created_at.format("%Y-%m-%d").to_string(),
            ]);
        }
        report
    }

    /// One row per transaction; `Items` counts every line item across the
    /// transaction's orders.
    pub fn transactions(transactions: &[Transaction]) -> Self {
        let mut report = Self::new(
            "Transaction Report",
            &["Name", "Total Amount", "Date", "Items"],
        );
        for tx in transactions {
            report.push_row(vec![
                tx.user_name.clone(),
                format!("${:.2}", tx.total_amount),
                tx.transaction_date.format("%Y-%m-%d").to_string(),
                tx.item_count().to_string(),
            ]);
        }
        report
    }

    pub fn templates(templates: &[NotificationTemplate]) -> Self {
        let mut report = Self::new(
            "Notification Template Report",
            &["Name", "Subject", "Created", "Updated"],
        );
        for template in templates {
            report.push_row(vec![
                template.name.clone(),
                template.subject.clone(),
                template.created_at.format("%Y-%m-%d").to_string(),
                template.updated_at.format("%Y-%m-%d").to_string(),
            ]);
        }
        report
    }
}

fn verified_label(verified: bool) -> &'static str {
    if verified {
        "Verified"
    } else {
        "Unverified"
    }
}

fn csv_line<S: AsRef<str>>(fields: &[S]) -> String {
    let mut line = String::new();
    for (i, field) in fields.iter().enumerate() {
        if i > 0 {
            line.push(',');
        }
        line.push_str(&csv_field(field.as_ref()));
    }
    line.push('\n');
    line
}

fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Render the styled receipt document for one transaction.
pub fn transaction_receipt_html(transaction: &Transaction) -> String {
    let mut orders_html = String::new();
    for (index, order) in transaction.orders.iter().enumerate() {
        let status_class = if order.status.eq_ignore_ascii_case("completed") {
            "completed"
        } else {
            "pending"
        };
        let mut items_html = String::new();
        for item in &order.items {
            items_html.push_str(&format!(
                r#"<tr>
              <td>{name}</td>
              <td>{quantity}</td>
              <td>${price:.2}</td>
              <td>${line_total:.2}</td>
            </tr>
"#,
                name = escape_html(&item.name),
                quantity = item.quantity,
                price = item.price,
                line_total = item.line_total(),
            ));
        }
        orders_html.push_str(&format!(
            r#"    <div class="section">
      <h3>Order #{number}</h3>
      <p><strong>Status:</strong> <span class="status {status_class}">{status}</span></p>
      <table class="table">
        <thead>
          <tr><th>Item</th><th>Quantity</th><th>Price</th><th>Total</th></tr>
        </thead>
        <tbody>
{items_html}        </tbody>
      </table>
      <p class="total">Order Total: ${order_total:.2}</p>
    </div>
"#,
            number = index + 1,
            status = escape_html(&order.status),
            order_total = order.order_total,
        ));
    }

    format!(
        r#"<html>
  <head>
    <style>
      body {{ font-family: Arial, sans-serif; line-height: 1.6; }}
      .header {{ color: #2d3748; font-size: 24px; margin-bottom: 20px; }}
      .section {{ margin-bottom: 30px; }}
      .table {{ width: 100%; border-collapse: collapse; margin: 20px 0; }}
      .table th {{ background-color: #f7fafc; text-align: left; padding: 12px; }}
      .table td {{ padding: 12px; border: 1px solid #e2e8f0; }}
      .total {{ font-size: 18px; font-weight: bold; color: #2d3748; }}
      .status {{ padding: 6px 12px; border-radius: 4px; font-size: 14px; }}
      .completed {{ background-color: #c6f6d5; color: #22543d; }}
      .pending {{ background-color: #fed7d7; color: #822727; }}
    </style>
  </head>
  <body>
    <h1 class="header">Transaction Receipt</h1>
    <div class="section">
      <h3>Transaction Details</h3>
      <p><strong>ID:</strong> {id}</p>
      <p><strong>Date:</strong> {date}</p>
      <p><strong>Customer:</strong> {customer}</p>
      <p><strong>Total Amount:</strong> ${total:.2}</p>
    </div>
{orders_html}  </body>
</html>
"#,
        id = escape_html(&transaction.id),
        date = transaction.transaction_date.format("%Y-%m-%d"),
        customer = escape_html(&transaction.user_name),
        total = transaction.total_amount,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{OrderItem, Role, TransactionOrder};

    fn sample_users() -> Vec<User> {
        vec![
            User {
                id: "u1".into(),
                name: "Asha Rao".into(),
                email: "asha@example.com".into(),
                phone: "555-0101".into(),
                role: Role::Admin,
                verified: true,
            },
            User {
                id: "u2".into(),
                name: "Lee, Jordan".into(),
                email: "jordan@example.com".into(),
                phone: "555-0102".into(),
                role: Role::Customer,
                verified: false,
            },
        ]
    }

    fn sample_transaction() -> Transaction {
        Transaction {
            id: "t1".into(),
            user_id: "u1".into(),
            user_name: "Asha Rao".into(),
            total_amount: 24.0,
            transaction_date: "2024-03-01T12:00:00Z".parse().unwrap(),
            orders: vec![TransactionOrder {
                order_id: "o1".into(),
                order_date: "2024-02-28T18:30:00Z".parse().unwrap(),
                order_total: 24.0,
                status: "completed".into(),
                items: vec![
                    OrderItem {
                        name: "Pad Thai".into(),
                        quantity: 2,
                        price: 9.0,
                    },
                    OrderItem {
                        name: "Spring Rolls".into(),
                        quantity: 1,
                        price: 6.0,
                    },
                ],
            }],
        }
    }

    #[test]
    fn test_users_report_columns_and_labels() {
        let report = TableReport::users(&sample_users());
        assert_eq!(report.title, "User Management Report");
        assert_eq!(report.headers, ["Name", "Email", "Phone", "Role", "Status"]);
        assert_eq!(report.rows.len(), 2);
        assert_eq!(report.rows[0][3], "Admin");
        assert_eq!(report.rows[0][4], "Verified");
        assert_eq!(report.rows[1][4], "Unverified");
    }

    #[test]
    fn test_csv_quotes_fields_with_commas() {
        let csv = TableReport::users(&sample_users()).to_csv();
        assert!(csv.starts_with("User Management Report\n"));
        assert!(csv.contains("Generated on: "));
        assert!(csv.contains("Name,Email,Phone,Role,Status\n"));
        // The comma-bearing name must be quoted, not split.
        assert!(csv.contains("\"Lee, Jordan\""));
    }

    #[test]
    fn test_csv_doubles_embedded_quotes() {
        let mut report = TableReport::new("T", &["A"]);
        report.push_row(vec!["say \"hi\"".to_string()]);
        assert!(report.to_csv().contains("\"say \"\"hi\"\"\""));
    }

    #[test]
    fn test_transactions_report_counts_items_across_orders() {
        let report = TableReport::transactions(&[sample_transaction()]);
        assert_eq!(report.rows[0][0], "Asha Rao");
        assert_eq!(report.rows[0][1], "$24.00");
        assert_eq!(report.rows[0][3], "2");
    }

    #[test]
    fn test_receipt_lists_items_and_totals() {
        let html = transaction_receipt_html(&sample_transaction());
        assert!(html.contains("Transaction Receipt"));
        assert!(html.contains("<strong>Customer:</strong> Asha Rao"));
        assert!(html.contains("Pad Thai"));
        // 2 x $9.00 line total
        assert!(html.contains("$18.00"));
        assert!(html.contains("Order Total: $24.00"));
        assert!(html.contains("class=\"status completed\""));
    }

    #[test]
    fn test_receipt_with_no_orders_still_renders() {
        let tx = Transaction {
            orders: vec![],
            total_amount: 0.0,
            ..sample_transaction()
        };
        let html = transaction_receipt_html(&tx);
        assert!(html.contains("<strong>Total Amount:</strong> $0.00"));
        assert!(!html.contains("Order #"));
    }

    #[test]
    fn test_receipt_escapes_markup_in_names() {
        let mut tx = sample_transaction();
        tx.orders[0].items[0].name = "<script>alert(1)</script>".into();
        let html = transaction_receipt_html(&tx);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }
}
