pub type Result<T> = std::result::Result<T, crate::error::Error>;

/// Fails with [`ErrorKind::OutOfRange`](crate::error::ErrorKind::OutOfRange) naming
/// `$name` unless `$expr` holds.
#[macro_export]
macro_rules! verify_arg {
    ($name:ident, $expr:expr) => {{
        let result = $expr;
        $crate::result::verify_arg(result, stringify!($name), stringify!($expr))?;
    }};
}

/// Fails with [`ErrorKind::InvalidOperation`](crate::error::ErrorKind::InvalidOperation)
/// unless `$expr` holds.
#[macro_export]
macro_rules! verify_state {
    ($name:expr, $expr:expr) => {{
        let result = $expr;
        $crate::result::verify_state(result, $name, stringify!($expr))?;
    }};
}

#[inline]
pub fn verify_arg(predicate: bool, name: &str, condition: &str) -> Result<()> {
    if predicate {
        Ok(())
    } else {
        out_of_range(name, condition)
    }
}

#[inline]
pub fn verify_state(predicate: bool, name: &str, condition: &str) -> Result<()> {
    if predicate {
        Ok(())
    } else {
        invalid_operation(name, condition)
    }
}

#[cold]
pub fn out_of_range(name: &str, condition: &str) -> Result<()> {
    Err(crate::error::ErrorKind::OutOfRange {
        name: name.to_string(),
        message: format!("expected {condition}"),
    }
    .into())
}

#[cold]
pub fn invalid_operation(name: &str, condition: &str) -> Result<()> {
    Err(crate::error::ErrorKind::InvalidOperation {
        name: name.to_string(),
        message: format!("expected {condition}"),
    }
    .into())
}
