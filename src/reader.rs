use anyhow::{Context, Result};
use std::fmt;
use std::path::{Path, PathBuf};
use tokio::fs::File;
use tokio::io::{AsyncRead, AsyncReadExt, BufReader};
use tracing::{debug, info, warn};

/// Configuration for input reading behavior
#[derive(Debug, Clone)]
pub struct ReaderConfig {
    /// Abort on the first unreadable input instead of reporting it and moving on
    pub fail_fast: bool,
    /// Buffer size for async reading (default: 8KB)
    pub buffer_size: usize,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            fail_fast: false,
            buffer_size: 8192,
        }
    }
}

/// Where a document comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdin => f.write_str("<stdin>"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Statistics for one read
#[derive(Debug, Clone)]
pub struct ReadStats {
    pub source: String,
    pub bytes_read: u64,
    pub duration_ms: u64,
    pub read_error: Option<String>,
}

/// Expand CLI inputs into concrete sources, preserving argument order.
///
/// No arguments (or a lone `-`) means stdin. Arguments with glob metacharacters expand to
/// their matches in path order; a pattern that matches nothing is an error.
pub fn resolve_inputs(args: &[String]) -> Result<Vec<InputSource>> {
    if args.is_empty() {
        return Ok(vec![InputSource::Stdin]);
    }

    let mut sources = Vec::new();
    for arg in args {
        if arg == "-" {
            sources.push(InputSource::Stdin);
            continue;
        }
        if !arg.contains(&['*', '?', '['][..]) {
            sources.push(InputSource::File(PathBuf::from(arg)));
            continue;
        }

        let before = sources.len();
        let paths = glob::glob(arg).with_context(|| format!("Invalid glob pattern {arg}"))?;
        for entry in paths {
            match entry {
                Ok(path) if path.is_file() => sources.push(InputSource::File(path)),
                Ok(_) => {}
                Err(e) => warn!("Skipping unreadable glob entry: {}", e),
            }
        }
        if sources.len() == before {
            anyhow::bail!("No files match pattern {arg}");
        }
    }

    debug!(inputs = sources.len(), "Resolved input sources");
    Ok(sources)
}

/// Async reader that loads whole documents, byte-exact
pub struct TextReader {
    config: ReaderConfig,
}

impl TextReader {
    pub fn new(config: ReaderConfig) -> Self {
        Self { config }
    }

    /// Read one source. Unless `fail_fast` is set, a failed read yields an empty text with
    /// the error recorded in the stats.
    pub async fn read(&self, source: &InputSource) -> Result<(String, ReadStats)> {
        let start_time = std::time::Instant::now();

        let result = match source {
            InputSource::Stdin => self.read_all(tokio::io::stdin()).await,
            InputSource::File(path) => match File::open(path).await {
                Ok(file) => self.read_all(file).await,
                Err(e) => Err(anyhow::Error::new(e)),
            },
        }
        .with_context(|| format!("Failed to read {source}"));

        let duration_ms = start_time.elapsed().as_millis() as u64;
        match result {
            Ok(text) => {
                info!("Read {}: {} bytes in {}ms", source, text.len(), duration_ms);
                let stats = ReadStats {
                    source: source.to_string(),
                    bytes_read: text.len() as u64,
                    duration_ms,
                    read_error: None,
                };
                Ok((text, stats))
            }
            Err(e) if !self.config.fail_fast => {
                warn!("{:#}", e);
                let stats = ReadStats {
                    source: source.to_string(),
                    bytes_read: 0,
                    duration_ms,
                    read_error: Some(format!("{e:#}")),
                };
                Ok((String::new(), stats))
            }
            Err(e) => Err(e),
        }
    }

    async fn read_all<R: AsyncRead + Unpin>(&self, inner: R) -> Result<String> {
        let mut reader = BufReader::with_capacity(self.config.buffer_size, inner);
        let mut text = String::new();
        reader.read_to_string(&mut text).await?;
        Ok(text)
    }
}

/// Read a single file with the default configuration, failing on any error
pub async fn read_text_async<P: AsRef<Path>>(file_path: P) -> Result<String> {
    let reader = TextReader::new(ReaderConfig {
        fail_fast: true,
        ..Default::default()
    });
    let (text, _stats) = reader.read(&InputSource::File(file_path.as_ref().to_path_buf())).await?;
    Ok(text)
}
