use crate::error::{Result, SeqrenError, FORBIDDEN_CHARS};

/// Longest file name, in bytes, accepted by common filesystems.
pub const MAX_NAME_LEN: usize = 255;

/// Check a base name against the Windows-unsafe character set.
///
/// The check runs regardless of host platform so that a batch renamed on
/// Linux can still be copied to a Windows volume.
pub fn validate_base_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(SeqrenError::EmptyName);
    }
    if name.contains(FORBIDDEN_CHARS) {
        return Err(SeqrenError::InvalidName(name.to_string()));
    }
    Ok(())
}

/// Extension of a file name, including the leading dot.
///
/// Everything from the last `.` is the extension, so `archive.tar.gz` yields
/// `.gz` and a dotfile such as `.env` is all extension. Names without a dot
/// have an empty extension.
pub fn extension(file_name: &str) -> &str {
    file_name.rfind('.').map_or("", |idx| &file_name[idx..])
}

/// `<base><zero-padded counter><extension>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameTemplate {
    base: String,
    seq_width: usize,
}

impl NameTemplate {
    pub fn new(base: impl Into<String>, seq_width: usize) -> Result<Self> {
        let base = base.into();
        validate_base_name(&base)?;
        if seq_width == 0 {
            return Err(SeqrenError::InvalidSeqWidth(0));
        }
        let max_width = MAX_NAME_LEN.saturating_sub(base.len());
        if seq_width > max_width {
            return Err(SeqrenError::SeqWidthTooLarge {
                width: seq_width,
                max: max_width,
            });
        }
        Ok(Self { base, seq_width })
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    /// Render the file name for a 1-based sequence number and an extension.
    pub fn render(&self, seq: usize, ext: &str) -> Result<String> {
        let name = format!(
            "{}{:0width$}{}",
            self.base,
            seq,
            ext,
            width = self.seq_width
        );

        if name.contains(FORBIDDEN_CHARS) || name.contains('\0') || name == "." || name == ".." {
            return Err(SeqrenError::InvalidTemplate(name));
        }

        Ok(name)
    }

    /// Render the destination name for `file_name`, keeping its extension.
    pub fn render_for(&self, seq: usize, file_name: &str) -> Result<String> {
        self.render(seq, extension(file_name))
    }
}
