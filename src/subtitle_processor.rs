use std::fmt;

// @module: Caption track representation and formatting

// @struct: Single timed caption entry
#[derive(Debug, Clone, PartialEq)]
pub struct CaptionEntry {
    // @field: Start offset in seconds
    pub start: f64,

    // @field: Duration in seconds
    pub duration: f64,

    // @field: Caption text
    pub text: String,
}

impl CaptionEntry {
    /// Creates a new caption entry
    pub fn new(start: f64, duration: f64, text: impl Into<String>) -> Self {
        CaptionEntry {
            start,
            duration,
            text: text.into(),
        }
    }

    /// End offset in seconds (start + duration)
    pub fn end(&self) -> f64 {
        self.start + self.duration
    }

    /// Format an offset in seconds to SRT format (HH:MM:SS,mmm)
    ///
    /// Whole seconds are split off by truncation and the fractional remainder
    /// is floored to milliseconds, never rounded up. Hours are unbounded;
    /// this is a duration-style timestamp, not a wall-clock time.
    pub fn format_timestamp(seconds: f64) -> String {
        let whole = seconds as u64;
        let millis = ((seconds - whole as f64) * 1000.0) as u64;

        let hours = whole / 3600;
        let minutes = (whole % 3600) / 60;
        let secs = whole % 60;

        format!("{:02}:{:02}:{:02},{:03}", hours, minutes, secs, millis)
    }

    /// Convert start time to formatted SRT timestamp
    pub fn format_start_time(&self) -> String {
        Self::format_timestamp(self.start)
    }

    /// Convert end time to formatted SRT timestamp
    pub fn format_end_time(&self) -> String {
        Self::format_timestamp(self.end())
    }
}

/// One numbered SRT cue, borrowing an entry from a track for rendering
pub struct SrtCue<'a> {
    /// 1-based cue index
    pub index: usize,

    /// The entry being rendered
    pub entry: &'a CaptionEntry,
}

impl fmt::Display for SrtCue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}", self.index)?;
        writeln!(
            f,
            "{} --> {}",
            self.entry.format_start_time(),
            self.entry.format_end_time()
        )?;
        writeln!(f, "{}", self.entry.text)?;
        writeln!(f)
    }
}

/// Collection of caption entries for one language track
#[derive(Debug, Clone)]
pub struct CaptionTrack {
    /// Language code as reported by the provider
    pub language: String,

    /// Ordered caption entries, chronological as supplied
    pub entries: Vec<CaptionEntry>,
}

impl CaptionTrack {
    /// Creates an empty caption track - used by tests and external consumers
    #[allow(dead_code)]
    pub fn new(language: impl Into<String>) -> Self {
        CaptionTrack {
            language: language.into(),
            entries: Vec::new(),
        }
    }

    /// Create a caption track from provider-supplied entries
    pub fn with_entries(language: impl Into<String>, entries: Vec<CaptionEntry>) -> Self {
        CaptionTrack {
            language: language.into(),
            entries,
        }
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Render the track in SRT cue format
    ///
    /// Each entry at 1-based position i becomes a block of the cue index, a
    /// `start --> end` timing line, the entry text, and a blank separator
    /// line. Entries with empty text still produce a block; text is passed
    /// through uninterpreted. An empty track renders as an empty string.
    pub fn to_srt(&self) -> String {
        let mut srt = String::new();
        for (i, entry) in self.entries.iter().enumerate() {
            srt.push_str(&SrtCue { index: i + 1, entry }.to_string());
        }
        srt
    }

    /// Render the track as plain text
    ///
    /// Entry texts joined with a single newline, in input order, with no
    /// trailing separator. An empty track renders as an empty string.
    pub fn to_plain_text(&self) -> String {
        self.entries
            .iter()
            .map(|entry| entry.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}
