//! Small utility helpers used across modules.

use chrono::Local;

/// Today's date as YYYY-MM-DD, the format stored on job applications.
pub fn today_ymd() -> String {
  Local::now().format("%Y-%m-%d").to_string()
}

/// Format seconds as m:ss for countdown display payloads.
pub fn format_mmss(seconds: u32) -> String {
  format!("{}:{:02}", seconds / 60, seconds % 60)
}

/// Log-safe truncation for large strings (resume text can be big).
pub fn trunc_for_log(s: &str, max: usize) -> String {
  if s.len() <= max {
    s.to_string()
  } else {
    let prefix: String = s.chars().take(max).collect();
    format!("{}… ({} bytes total)", prefix, s.len())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn mmss_formats_with_zero_padding() {
    assert_eq!(format_mmss(300), "5:00");
    assert_eq!(format_mmss(61), "1:01");
    assert_eq!(format_mmss(9), "0:09");
    assert_eq!(format_mmss(0), "0:00");
  }

  #[test]
  fn today_is_iso_shaped() {
    let d = today_ymd();
    assert_eq!(d.len(), 10);
    assert_eq!(d.as_bytes()[4], b'-');
    assert_eq!(d.as_bytes()[7], b'-');
  }

  #[test]
  fn truncation_keeps_short_strings_intact() {
    assert_eq!(trunc_for_log("short", 10), "short");
    assert!(trunc_for_log(&"x".repeat(100), 10).contains("100 bytes"));
  }
}
