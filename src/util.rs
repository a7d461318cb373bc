pub fn error_chain_fmt(
    err: &impl std::error::Error,
    f: &mut std::fmt::Formatter<'_>,
) -> std::fmt::Result {
    writeln!(f, "{}\n", err)?;
    let mut current = err.source();
    while let Some(cause) = current {
        write!(f, "Caused by:\n\t{}\n", cause)?;
        current = cause.source();
    }
    Ok(())
}
