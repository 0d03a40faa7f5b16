use uuid::Uuid;

/// A record that can authenticate with CPF and password.
///
/// Implemented by every role table. `TABLE` names the backing table and
/// `LABEL` is the role name used in client-facing messages
/// (`"<LABEL> not found"`).
pub trait Principal {
    const TABLE: &'static str;
    const LABEL: &'static str;

    fn id(&self) -> Uuid;
    fn name(&self) -> &str;
    fn password_hash(&self) -> &str;
}
