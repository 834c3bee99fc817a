use std::{
    fs,
    io::{self, BufWriter, Write},
    path::Path,
};

/// Write `content` to `path`, creating parent directories first.
///
/// The file handle lives only for the duration of this call and is closed
/// whether the write succeeds or fails.
pub fn write_file(path: &Path, content: &str) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut writer = BufWriter::new(fs::File::create(path)?);
    writer.write_all(content.as_bytes())?;
    writer.flush()
}
