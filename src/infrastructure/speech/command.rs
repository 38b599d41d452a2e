//! External command speech recognition adapter

use std::process::Stdio;

use async_trait::async_trait;
use tokio::io::{AsyncBufReadExt, BufReader, Lines};
use tokio::process::{Child, ChildStdout, Command};

use crate::application::ports::{SpeechError, SpeechEvent, SpeechRecognizer, SpeechSession};
use crate::domain::dictation::RecognitionSettings;

/// Speech recognizer backed by an external streaming STT command.
///
/// Contract with the command: it prints one recognized segment per stdout
/// line and accepts `-l <language>` for the recognition language. The
/// bundled default, `whisper-stream`, speaks exactly this protocol. The
/// configured command string is split on whitespace into program and
/// fixed arguments; shell quoting is not supported.
pub struct CommandRecognizer {
    program: String,
    base_args: Vec<String>,
}

impl CommandRecognizer {
    /// Create a recognizer from a command string (program + fixed args)
    pub fn new(command: &str) -> Self {
        let mut parts = command.split_whitespace().map(String::from);
        let program = parts.next().unwrap_or_default();

        Self {
            program,
            base_args: parts.collect(),
        }
    }

    /// Get the program name the capability check looks for
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Build the argument list for one session
    fn build_args(&self, settings: &RecognitionSettings) -> Vec<String> {
        let mut args = self.base_args.clone();
        args.push("-l".to_string());
        args.push(settings.locale.language().to_string());
        args
    }

    /// Check if a program resolves on PATH
    async fn resolves_on_path(program: &str) -> bool {
        let finder = if cfg!(windows) { "where" } else { "which" };

        Command::new(finder)
            .arg(program)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await
            .map(|s| s.success())
            .unwrap_or(false)
    }
}

#[async_trait]
impl SpeechRecognizer for CommandRecognizer {
    async fn check_available(&self) -> Result<(), SpeechError> {
        if self.program.is_empty() {
            return Err(SpeechError::Unavailable(
                "no speech command configured".to_string(),
            ));
        }

        if !Self::resolves_on_path(&self.program).await {
            return Err(SpeechError::Unavailable(format!(
                "'{}' not found on PATH",
                self.program
            )));
        }

        Ok(())
    }

    async fn open(
        &self,
        settings: &RecognitionSettings,
    ) -> Result<Box<dyn SpeechSession>, SpeechError> {
        let args = self.build_args(settings);
        log::debug!("Opening recognizer: {} {}", self.program, args.join(" "));

        let mut child = Command::new(&self.program)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    SpeechError::Unavailable(format!("'{}' not found on PATH", self.program))
                } else {
                    SpeechError::StartFailed(e.to_string())
                }
            })?;

        let stdout = child.stdout.take().ok_or_else(|| {
            SpeechError::StartFailed("recognizer stdout was not captured".to_string())
        })?;

        // Drain stderr to the debug log so recognizer chatter stays out
        // of the event stream
        if let Some(stderr) = child.stderr.take() {
            tokio::spawn(async move {
                let mut lines = BufReader::new(stderr).lines();
                while let Ok(Some(line)) = lines.next_line().await {
                    log::debug!("recognizer: {}", line);
                }
            });
        }

        Ok(Box::new(CommandSpeechSession {
            child,
            lines: BufReader::new(stdout).lines(),
            segments: Vec::new(),
            closed: false,
        }))
    }
}

/// Live session over a spawned recognizer process.
///
/// Accumulates one segment per stdout line and emits the full transcript
/// so far (segments joined with single spaces) on every event, giving
/// consumers the replace-not-append contract of the port.
struct CommandSpeechSession {
    child: Child,
    lines: Lines<BufReader<ChildStdout>>,
    segments: Vec<String>,
    closed: bool,
}

#[async_trait]
impl SpeechSession for CommandSpeechSession {
    async fn next_event(&mut self) -> Option<SpeechEvent> {
        if self.closed {
            return None;
        }

        loop {
            match self.lines.next_line().await {
                Ok(Some(line)) => {
                    let segment = line.trim();
                    if segment.is_empty() {
                        continue;
                    }
                    self.segments.push(segment.to_string());
                    return Some(SpeechEvent::Transcript(self.segments.join(" ")));
                }
                // Pipe closed: the command finished or died
                Ok(None) => {
                    self.closed = true;
                    return None;
                }
                Err(err) => {
                    self.closed = true;
                    return Some(SpeechEvent::Error(err.to_string()));
                }
            }
        }
    }

    async fn stop(&mut self) -> Result<(), SpeechError> {
        self.closed = true;

        if let Err(err) = self.child.start_kill() {
            // Process already gone is fine; the session ends either way
            log::debug!("Recognizer kill: {}", err);
        }
        let _ = self.child.wait().await;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_program_and_fixed_args() {
        let recognizer = CommandRecognizer::new("whisper-stream -m tiny.bin");
        assert_eq!(recognizer.program(), "whisper-stream");
        assert_eq!(recognizer.base_args, vec!["-m", "tiny.bin"]);
    }

    #[test]
    fn appends_the_language_flag() {
        let recognizer = CommandRecognizer::new("whisper-stream");
        let args = recognizer.build_args(&RecognitionSettings::default());
        assert_eq!(args, vec!["-l", "pt"]);
    }

    #[test]
    fn language_flag_follows_the_locale() {
        let recognizer = CommandRecognizer::new("whisper-stream");
        let settings = RecognitionSettings::continuous("en-US".parse().unwrap());
        let args = recognizer.build_args(&settings);
        assert_eq!(args, vec!["-l", "en"]);
    }

    #[tokio::test]
    async fn check_available_rejects_a_missing_program() {
        let recognizer = CommandRecognizer::new("definitely-not-a-real-recognizer-binary");
        let result = recognizer.check_available().await;
        assert!(matches!(result, Err(SpeechError::Unavailable(_))));
    }

    #[tokio::test]
    async fn check_available_rejects_an_empty_command() {
        let recognizer = CommandRecognizer::new("");
        let result = recognizer.check_available().await;
        assert!(matches!(result, Err(SpeechError::Unavailable(_))));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn check_available_accepts_a_present_program() {
        let recognizer = CommandRecognizer::new("sh");
        assert!(recognizer.check_available().await.is_ok());
    }

    #[cfg(unix)]
    mod scripted {
        use super::*;
        use std::io::Write;
        use std::os::unix::fs::PermissionsExt;

        /// Write an executable stand-in recognizer script
        fn script(body: &str) -> (tempfile::TempDir, String) {
            let dir = tempfile::tempdir().unwrap();
            let path = dir.path().join("recognizer.sh");

            let mut file = std::fs::File::create(&path).unwrap();
            writeln!(file, "#!/bin/sh").unwrap();
            writeln!(file, "{}", body).unwrap();

            let mut perms = file.metadata().unwrap().permissions();
            perms.set_mode(0o755);
            std::fs::set_permissions(&path, perms).unwrap();

            (dir, path.to_string_lossy().to_string())
        }

        async fn open(path: &str) -> Box<dyn SpeechSession> {
            CommandRecognizer::new(path)
                .open(&RecognitionSettings::default())
                .await
                .unwrap()
        }

        #[tokio::test]
        async fn accumulates_segments_into_cumulative_transcripts() {
            let (_dir, path) = script("printf 'hello\\nworld\\n'");
            let mut session = open(&path).await;

            assert_eq!(
                session.next_event().await,
                Some(SpeechEvent::Transcript("hello".to_string()))
            );
            assert_eq!(
                session.next_event().await,
                Some(SpeechEvent::Transcript("hello world".to_string()))
            );
            assert_eq!(session.next_event().await, None);
        }

        #[tokio::test]
        async fn blank_lines_are_not_segments() {
            let (_dir, path) = script("printf 'one\\n\\n   \\ntwo\\n'");
            let mut session = open(&path).await;

            assert_eq!(
                session.next_event().await,
                Some(SpeechEvent::Transcript("one".to_string()))
            );
            assert_eq!(
                session.next_event().await,
                Some(SpeechEvent::Transcript("one two".to_string()))
            );
            assert_eq!(session.next_event().await, None);
        }

        #[tokio::test]
        async fn stop_silences_the_session() {
            let (_dir, path) = script("printf 'first\\n'; sleep 5; printf 'late\\n'");
            let mut session = open(&path).await;

            assert_eq!(
                session.next_event().await,
                Some(SpeechEvent::Transcript("first".to_string()))
            );

            session.stop().await.unwrap();
            assert_eq!(session.next_event().await, None);
        }

        #[tokio::test]
        async fn stderr_chatter_does_not_become_events() {
            let (_dir, path) = script("echo 'model loading noise' 1>&2; printf 'signal\\n'");
            let mut session = open(&path).await;

            assert_eq!(
                session.next_event().await,
                Some(SpeechEvent::Transcript("signal".to_string()))
            );
            assert_eq!(session.next_event().await, None);
        }
    }
}
