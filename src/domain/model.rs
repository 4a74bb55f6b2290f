/// Target table and the constant written next to every payload.
pub const INSERT_SQL: &str = "INSERT INTO mytable (column1, column2) VALUES (?, ?)";
pub const SECOND_COLUMN_VALUE: &str = "Another Value";

pub const NAME_PROMPT: &str = "Enter your name: ";

pub const DEFAULT_ADMIN_EMAIL: &str = "admin@example.com";
pub const NOTICE_SUBJECT: &str = "User Input";

/// The line a user typed at the prompt, terminator removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserInput(pub String);

/// Response body from the remote endpoint, stored as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedPayload(pub String);

/// A parameterized insert. `sql` is always the constant statement text;
/// values only ever travel in `params`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsertStatement {
    pub sql: &'static str,
    pub params: [String; 2],
}

impl InsertStatement {
    pub fn for_payload(payload: &FetchedPayload) -> Self {
        Self {
            sql: INSERT_SQL,
            params: [payload.0.clone(), SECOND_COLUMN_VALUE.to_string()],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailMessage {
    pub to: String,
    pub subject: String,
    pub body: String,
}

impl MailMessage {
    /// The admin notice for one run: fixed subject, the user's input as body.
    pub fn admin_notice(admin_email: &str, input: &UserInput) -> Self {
        Self {
            to: admin_email.to_string(),
            subject: NOTICE_SUBJECT.to_string(),
            body: input.0.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_statement_binds_payload_first() {
        let stmt = InsertStatement::for_payload(&FetchedPayload("payload-xyz".to_string()));
        assert_eq!(stmt.sql, INSERT_SQL);
        assert_eq!(stmt.params[0], "payload-xyz");
        assert_eq!(stmt.params[1], "Another Value");
    }

    #[test]
    fn test_injection_payload_stays_out_of_sql_text() {
        let hostile = "x'); DROP TABLE mytable; --";
        let stmt = InsertStatement::for_payload(&FetchedPayload(hostile.to_string()));

        assert!(!stmt.sql.contains(hostile));
        assert!(!stmt.sql.contains("DROP"));
        assert_eq!(stmt.sql.matches('?').count(), 2);
        assert_eq!(stmt.params[0], hostile);
    }

    #[test]
    fn test_admin_notice_uses_input_as_body() {
        let msg = MailMessage::admin_notice(DEFAULT_ADMIN_EMAIL, &UserInput("Alice".to_string()));
        assert_eq!(msg.to, "admin@example.com");
        assert_eq!(msg.subject, "User Input");
        assert_eq!(msg.body, "Alice");
    }
}
