use std::path::PathBuf;

/// Reads a file from the `moose_files` directory next to this test
pub fn moose_file(name: &str) -> eyre::Result<(String, String)> {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("moose_files")
        .join(name);
    let source = std::fs::read_to_string(&path)?;
    Ok((path.display().to_string(), source))
}
