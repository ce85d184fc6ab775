use anyhow::{Context, Result, bail};
use arboard::Clipboard;

/// Largest clipboard transcript accepted (10MB)
const MAX_CLIPBOARD_SIZE: usize = 10 * 1024 * 1024;

/// Clipboard access, mockable in tests
trait ClipboardProvider {
    fn get_text(&mut self) -> Result<String>;
}

struct SystemClipboard {
    clipboard: Clipboard,
}

impl SystemClipboard {
    fn new() -> Result<Self> {
        let clipboard = Clipboard::new().context("Failed to initialize clipboard")?;
        Ok(Self { clipboard })
    }
}

impl ClipboardProvider for SystemClipboard {
    fn get_text(&mut self) -> Result<String> {
        self.clipboard.get_text().context("Clipboard does not contain text")
    }
}

fn validate_clipboard_text(text: &str) -> Result<()> {
    if text.trim().is_empty() {
        bail!("Clipboard is empty; copy the transcript table first");
    }

    if text.len() > MAX_CLIPBOARD_SIZE {
        bail!("Clipboard text too large ({} bytes, max {})", text.len(), MAX_CLIPBOARD_SIZE);
    }

    Ok(())
}

fn read_with_provider(provider: &mut dyn ClipboardProvider) -> Result<String> {
    let text = provider.get_text()?;
    validate_clipboard_text(&text)?;
    Ok(text)
}

/// Read a pasted transcript from the system clipboard
///
/// # Errors
/// Returns error if:
/// - The clipboard is unavailable (headless session, missing display server)
/// - It holds no text, or only whitespace
/// - The text is larger than 10MB
///
/// # Platform Support
/// - macOS: pasteboard API
/// - Linux: X11 or Wayland
/// - Windows: Win32 clipboard
pub fn read_transcript_from_clipboard() -> Result<String> {
    let mut clipboard = SystemClipboard::new()?;
    read_with_provider(&mut clipboard)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct MockClipboard {
        text: Option<String>,
    }

    impl ClipboardProvider for MockClipboard {
        fn get_text(&mut self) -> Result<String> {
            match &self.text {
                Some(text) => Ok(text.clone()),
                None => bail!("Mock clipboard unavailable"),
            }
        }
    }

    fn mock(text: &str) -> MockClipboard {
        MockClipboard { text: Some(text.to_string()) }
    }

    #[test]
    fn test_read_transcript_with_mock() {
        let transcript = "2020\t1\tCOMP101\t자료구조\t전공\t\t3\t95\tA+\t4.5\n";
        let text = read_with_provider(&mut mock(transcript)).unwrap();
        assert_eq!(text, transcript);
    }

    #[test]
    fn test_clipboard_unavailable() {
        let mut unavailable = MockClipboard { text: None };
        let result = read_with_provider(&mut unavailable);
        assert!(result.unwrap_err().to_string().contains("Mock clipboard unavailable"));
    }

    #[test]
    fn test_whitespace_only_clipboard_rejected() {
        let result = read_with_provider(&mut mock(" \n\t "));
        assert!(result.unwrap_err().to_string().contains("Clipboard is empty"));
    }

    #[test]
    fn test_oversized_clipboard_rejected() {
        let large = "가".repeat(MAX_CLIPBOARD_SIZE / 3 + 1);
        let result = read_with_provider(&mut mock(&large));
        let message = result.unwrap_err().to_string();
        assert!(message.contains("too large"));
        assert!(message.contains("bytes"));
    }

    #[test]
    fn test_exactly_at_limit_accepted() {
        let text = "a".repeat(MAX_CLIPBOARD_SIZE);
        assert!(read_with_provider(&mut mock(&text)).is_ok());
    }

    #[test]
    fn test_system_clipboard_integration() {
        if std::env::var("ENABLE_CLIPBOARD_TESTS").is_err() {
            return;
        }
        if let Err(e) = read_transcript_from_clipboard() {
            eprintln!("System clipboard unavailable: {}", e);
        }
    }
}
