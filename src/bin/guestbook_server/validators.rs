use super::*;

/// A recording name must stay inside the recordings directory.
pub(super) fn validate_filename(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(anyhow::anyhow!("filename cannot be empty"));
    }
    if name == "." || name == ".." {
        return Err(anyhow::anyhow!("filename cannot be '.' or '..'"));
    }
    if name.contains(['/', '\\', '\0']) {
        return Err(anyhow::anyhow!("filename cannot contain path separators"));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/bin/guestbook_server/validators_tests.rs"]
mod tests;
