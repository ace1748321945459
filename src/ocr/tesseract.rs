//! [`Recognizer`] backed by the `tesseract` command-line tool.
//!
//! Each call pipes the patch as PNG on stdin and reads plain text from
//! stdout. A call that cannot spawn, exits non-zero or runs past its timeout
//! yields `""`; the child is killed on timeout.
use super::{Recognizer, Vocabulary};
use crate::image::io::encode_png;
use crate::image::GrayImageU8;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::io::{Read, Write};
use std::process::{Command, Stdio};
use std::thread;
use std::time::{Duration, Instant};

const POLL_INTERVAL: Duration = Duration::from_millis(5);

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct TesseractCli {
    /// Executable name or path.
    pub binary: String,
    /// Language pack for free text.
    pub text_lang: String,
    /// Language pack for digit and clock cells.
    pub digit_lang: String,
    pub text_timeout_ms: u64,
    pub clock_timeout_ms: u64,
    pub digit_timeout_ms: u64,
}

impl Default for TesseractCli {
    fn default() -> Self {
        Self {
            binary: "tesseract".to_string(),
            text_lang: "fra".to_string(),
            digit_lang: "eng".to_string(),
            text_timeout_ms: 8_000,
            clock_timeout_ms: 6_000,
            digit_timeout_ms: 5_000,
        }
    }
}

impl TesseractCli {
    /// Command-line arguments after `stdin stdout`.
    pub fn args(&self, vocabulary: Vocabulary) -> Vec<String> {
        let (psm, lang) = match vocabulary {
            Vocabulary::Text => ("7", self.text_lang.as_str()),
            Vocabulary::Clock => ("7", self.digit_lang.as_str()),
            Vocabulary::Digits | Vocabulary::FoulDigits => ("10", self.digit_lang.as_str()),
        };
        let mut args: Vec<String> = ["--oem", "1", "--psm", psm, "-l", lang]
            .iter()
            .map(|s| s.to_string())
            .collect();
        if let Some(chars) = vocabulary.whitelist() {
            args.push("-c".into());
            args.push(format!("tessedit_char_whitelist={chars}"));
        }
        if vocabulary == Vocabulary::FoulDigits {
            args.push("-c".into());
            args.push("classify_bln_numeric_mode=1".into());
        }
        args
    }

    pub fn timeout(&self, vocabulary: Vocabulary) -> Duration {
        Duration::from_millis(match vocabulary {
            Vocabulary::Text => self.text_timeout_ms,
            Vocabulary::Clock => self.clock_timeout_ms,
            Vocabulary::Digits | Vocabulary::FoulDigits => self.digit_timeout_ms,
        })
    }

    fn run(&self, png: Vec<u8>, vocabulary: Vocabulary) -> Option<String> {
        let mut child = Command::new(&self.binary)
            .arg("stdin")
            .arg("stdout")
            .args(self.args(vocabulary))
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| warn!("failed to spawn {}: {e}", self.binary))
            .ok()?;

        let mut stdin = child.stdin.take()?;
        let writer = thread::spawn(move || stdin.write_all(&png));
        let mut stdout = child.stdout.take()?;
        let reader = thread::spawn(move || {
            let mut bytes = Vec::new();
            stdout.read_to_end(&mut bytes).map(|_| bytes)
        });

        let deadline = Instant::now() + self.timeout(vocabulary);
        let status = loop {
            match child.try_wait() {
                Ok(Some(status)) => break status,
                Ok(None) if Instant::now() >= deadline => {
                    let _ = child.kill();
                    let _ = child.wait();
                    warn!("{} timed out on a {vocabulary:?} cell", self.binary);
                    return None;
                }
                Ok(None) => thread::sleep(POLL_INTERVAL),
                Err(e) => {
                    warn!("waiting on {} failed: {e}", self.binary);
                    return None;
                }
            }
        };
        let _ = writer.join();
        let bytes = reader.join().ok()?.ok()?;
        if !status.success() {
            debug!("{} exited with {status}", self.binary);
            return None;
        }
        Some(String::from_utf8_lossy(&bytes).into_owned())
    }
}

impl Recognizer for TesseractCli {
    fn recognize(&self, patch: &GrayImageU8, vocabulary: Vocabulary) -> String {
        if patch.is_empty() {
            return String::new();
        }
        let png = match encode_png(patch) {
            Ok(png) => png,
            Err(e) => {
                warn!("failed to encode cell for recognition: {e}");
                return String::new();
            }
        };
        self.run(png, vocabulary)
            .map(|text| text.trim().to_string())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arguments_follow_vocabulary() {
        let cli = TesseractCli::default();
        assert_eq!(cli.args(Vocabulary::Text), ["--oem", "1", "--psm", "7", "-l", "fra"]);
        let fouls = cli.args(Vocabulary::FoulDigits);
        assert!(fouls.contains(&"tessedit_char_whitelist=012345".to_string()));
        assert!(fouls.contains(&"classify_bln_numeric_mode=1".to_string()));
        assert!(fouls.contains(&"10".to_string()));
        let clock = cli.args(Vocabulary::Clock);
        assert!(clock.contains(&"tessedit_char_whitelist=0123456789:".to_string()));
        assert_eq!(cli.timeout(Vocabulary::Text), Duration::from_secs(8));
        assert_eq!(cli.timeout(Vocabulary::Digits), Duration::from_secs(5));
    }

    #[test]
    fn missing_binary_reads_as_empty() {
        let cli = TesseractCli {
            binary: "/nonexistent/tesseract-binary".to_string(),
            ..TesseractCli::default()
        };
        let patch = GrayImageU8::filled(8, 8, 255);
        assert_eq!(cli.recognize(&patch, Vocabulary::Digits), "");
    }
}
