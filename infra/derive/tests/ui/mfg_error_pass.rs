use mfg_derive::mfg_error;
use std::borrow::Cow;

#[mfg_error]
pub enum CatalogFileError {
    #[error("Catalog file unreadable{}: {source}", format_context(.context))]
    Io {
        #[source]
        source: std::io::Error,
        context: Option<Cow<'static, str>>,
    },

    #[error("Unknown material {id}")]
    UnknownMaterial { id: String },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn read(path: &str) -> Result<String, CatalogFileError> {
    std::fs::read_to_string(path).context("Reading price table")
}

fn main() {
    let err = read("/definitely/not/here").unwrap_err();
    assert!(err.to_string().contains("(Reading price table)"));

    let err: Result<(), CatalogFileError> = Err("boom".into());
    let err = err.context("while testing").unwrap_err();
    assert_eq!(err.to_string(), "Internal error (while testing): boom");

    let unknown = CatalogFileError::UnknownMaterial { id: "m-1".to_owned() };
    assert_eq!(unknown.to_string(), "Unknown material m-1");
}
