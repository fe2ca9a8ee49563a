use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// Reads the query from inline text, a file, or stdin when the path is "-".
pub fn load_query_source(query_file: Option<&Path>, query_text: Option<&str>) -> Result<String, String> {
    if let Some(text) = query_text {
        return Ok(text.to_string());
    }

    if let Some(path) = query_file {
        if path.as_os_str() == "-" {
            return load_stdin();
        }
        return load_file(path);
    }

    Err("query is required: use -q/--query or --query-file".to_string())
}

fn load_stdin() -> Result<String, String> {
    let mut buf = String::new();
    io::stdin()
        .read_to_string(&mut buf)
        .map_err(|e| format!("failed to read stdin: {}", e))?;
    Ok(buf)
}

fn load_file(path: &Path) -> Result<String, String> {
    fs::read_to_string(path).map_err(|e| format!("failed to read '{}': {}", path.display(), e))
}
