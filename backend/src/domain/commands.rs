//! Domain-level command types
//!
//! These structs are the inputs services accept from the UI layer. The UI is
//! responsible for mapping form state (text fields, file picker selection) to
//! these types before calling into the domain.

pub mod ingestion {
    use shared::Currency;

    /// A statement file selected by the user, read into memory
    #[derive(Debug, Clone)]
    pub struct StatementUpload {
        pub file_name: String,
        pub contents: Vec<u8>,
    }

    /// Input for one ingestion run
    #[derive(Debug, Clone)]
    pub struct IngestStatementCommand {
        /// The selected statement, if any. Absence is a validation error
        /// reported before any network call is attempted.
        pub statement: Option<StatementUpload>,
        /// Raw salary text as entered in the form
        pub salary: String,
        pub currency: Currency,
    }
}
