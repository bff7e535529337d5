//! Handles merging generated content with existing files.

use super::tool::MergeStrategy;

/// Merge generated content with existing file content
pub fn merge_content(
    strategy: MergeStrategy,
    existing: &str,
    generated: &str,
    start_marker: &str,
    end_marker: &str,
) -> String {
    match strategy {
        MergeStrategy::Replace => generated.to_string(),

        MergeStrategy::Section => {
            merge_with_markers(existing, generated, start_marker, end_marker)
        }

        MergeStrategy::Append => {
            format!("{}\n\n{}", existing.trim_end(), generated)
        }
    }
}

/// Merge content using section markers.
///
/// If markers exist in the existing content, replaces the section between
/// them. Otherwise, appends the new section at the end.
pub fn merge_with_markers(
    existing: &str,
    generated: &str,
    start_marker: &str,
    end_marker: &str,
) -> String {
    if let (Some(start_pos), Some(end_pos)) =
        (existing.find(start_marker), existing.find(end_marker))
    {
        if start_pos < end_pos {
            // Replace existing generated section. Separators are emitted only
            // when there is surrounding content, so re-merging a file that is
            // nothing but the generated section reproduces it byte-for-byte.
            let before = existing[..start_pos].trim_end();
            let after = existing[end_pos + end_marker.len()..].trim_start();

            let mut out = String::new();
            if !before.is_empty() {
                out.push_str(before);
                out.push_str("\n\n");
            }
            out.push_str(&wrap_with_markers(generated, start_marker, end_marker));
            if !after.is_empty() {
                out.push_str("\n\n");
                out.push_str(after);
            }
            out
        } else {
            // Malformed markers - append new section
            append_section(existing, generated, start_marker, end_marker)
        }
    } else {
        // No existing markers - append new section
        append_section(existing, generated, start_marker, end_marker)
    }
}

/// Wrap content with section markers
fn wrap_with_markers(content: &str, start_marker: &str, end_marker: &str) -> String {
    format!("{}\n{}\n{}", start_marker, content, end_marker)
}

/// Append a new section to existing content
fn append_section(
    existing: &str,
    generated: &str,
    start_marker: &str,
    end_marker: &str,
) -> String {
    let trimmed = existing.trim_end();
    if trimmed.is_empty() {
        wrap_with_markers(generated, start_marker, end_marker)
    } else {
        format!(
            "{}\n\n{}",
            trimmed,
            wrap_with_markers(generated, start_marker, end_marker)
        )
    }
}
