use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

const TMP_SUFFIX: &str = "tmp";

/// Replaces `path` with `data` by staging to a sibling temp file first, so a
/// failed write leaves the previous contents in place.
pub fn replace_file(path: &Path, data: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let tmp = tmp_path(path);
    let result = write_staged(&tmp, data).and_then(|()| fs::rename(&tmp, path));
    if result.is_err() {
        // Best-effort cleanup of the staged file.
        let _ = fs::remove_file(&tmp);
    }
    result
}

fn write_staged(tmp: &Path, data: &str) -> std::io::Result<()> {
    let mut file = File::create(tmp)?;
    file.write_all(data.as_bytes())?;
    file.flush()
}

pub(crate) fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}
