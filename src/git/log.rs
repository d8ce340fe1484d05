use crate::error::{PulseError, Result};
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use std::io::{self, BufRead, BufReader, Read};
use std::path::{Path, PathBuf};
use std::process::{Child, ChildStdout, Command, Stdio};
use std::thread;

// One delimiter line, the committer timestamp (%ct, not author time), then
// numstat change lines.
const LOG_FORMAT: &str = "--pretty=format:---COMMIT---%n%ct";

pub struct GitLog {
    path: PathBuf,
}

impl GitLog {
    /// Open a repository at `path`, or current dir if `None`
    pub fn open<P: AsRef<Path>>(path: Option<P>) -> Result<Self> {
        let path = match path {
            Some(p) => p.as_ref().to_path_buf(),
            None => std::env::current_dir()?,
        };

        let check = Command::new("git")
            .arg("-C")
            .arg(&path)
            .args(["rev-parse", "--git-dir"])
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()?;
        if !check.success() {
            return Err(PulseError::Git(format!(
                "not a git repository: {}",
                path.display()
            )));
        }

        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Spawn the history query; drain the stream, then call
    /// [`LogStream::finish`] to reap the subprocess.
    pub fn spawn_log(&self, since: Option<DateTime<Utc>>) -> Result<LogStream> {
        let mut cmd = Command::new("git");
        cmd.arg("-C")
            .arg(&self.path)
            .arg("log")
            .arg(LOG_FORMAT)
            .arg("--numstat")
            .arg("--no-color");
        if let Some(since) = since {
            cmd.arg(format!("--since={}", since.to_rfc3339()));
        }
        cmd.stdout(Stdio::piped()).stderr(Stdio::piped());

        let mut child = cmd.spawn()?;
        let stdout = child
            .stdout
            .take()
            .ok_or_else(|| PulseError::Git("no stdout handle on git log".to_string()))?;

        // stderr drains on its own thread; a full pipe would stall git
        // behind the stdout reader.
        let stderr = child.stderr.take().map(|mut err| {
            thread::spawn(move || {
                let mut buf = String::new();
                err.read_to_string(&mut buf).ok();
                buf
            })
        });

        Ok(LogStream {
            child,
            reader: BufReader::new(stdout),
            stderr,
        })
    }
}

pub struct LogStream {
    child: Child,
    reader: BufReader<ChildStdout>,
    stderr: Option<thread::JoinHandle<String>>,
}

impl LogStream {
    /// Reap the child after the stream is drained; a nonzero exit surfaces
    /// git's stderr.
    pub fn finish(mut self) -> Result<()> {
        let status = self.child.wait()?;
        let stderr = self
            .stderr
            .take()
            .and_then(|capture| capture.join().ok())
            .unwrap_or_default();
        if !status.success() {
            return Err(PulseError::Git(format!(
                "git log exited with {status}: {}",
                stderr.trim()
            )));
        }
        Ok(())
    }
}

impl Read for LogStream {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.reader.read(buf)
    }
}

impl BufRead for LogStream {
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        self.reader.fill_buf()
    }

    fn consume(&mut self, amt: usize) {
        self.reader.consume(amt)
    }
}

/// RFC3339, `YYYY-MM-DD` (UTC midnight), or a duration like `30d` counted
/// back from `now`.
pub fn resolve_since(expr: &str, now: DateTime<Utc>) -> Result<DateTime<Utc>> {
    // RFC3339
    if let Ok(dt) = DateTime::parse_from_rfc3339(expr) {
        return Ok(dt.with_timezone(&Utc));
    }

    // YYYY-MM-DD
    if let Ok(date) = NaiveDate::parse_from_str(expr, "%Y-%m-%d") {
        if let Some(datetime) = date.and_hms_opt(0, 0, 0) {
            return Ok(Utc.from_utc_datetime(&datetime));
        }
    }

    // Relative duration (e.g., "30d", "2weeks")
    if let Ok(duration) = humantime::parse_duration(expr) {
        let duration = chrono::Duration::from_std(duration)
            .map_err(|_| PulseError::InvalidDate(format!("duration out of range: '{expr}'")))?;
        return now
            .checked_sub_signed(duration)
            .ok_or_else(|| PulseError::InvalidDate(format!("duration overflow for '{expr}'")));
    }

    Err(PulseError::InvalidDate(format!(
        "invalid since expression '{expr}' (expected RFC3339, YYYY-MM-DD, or a duration like 30d)"
    )))
}
