use crate::HeatmapError;
use floorheat_core::{decode_pixels, DecodeError, EncodingVersion, Heatmap};
use floorheat_source::{HeatmapSource, ImageDecoder};

#[cfg(feature = "tracing")]
use tracing::instrument;

/// A decode whose arguments have already been checked.
///
/// Building one never touches the image decoder, so argument errors surface
/// synchronously. [`DecodeRequest::run`] then performs the only I/O.
#[derive(Clone, Copy, Debug)]
pub struct DecodeRequest<'a> {
    source: &'a HeatmapSource,
    floor_count: usize,
    version: EncodingVersion,
}

impl<'a> DecodeRequest<'a> {
    /// Validate the version tag, floor count and source reference.
    pub fn new(
        source: &'a HeatmapSource,
        floor_count: usize,
        version: u32,
    ) -> Result<Self, HeatmapError> {
        let version = EncodingVersion::try_from(version)?;
        if floor_count == 0 {
            return Err(DecodeError::InvalidFloorCount.into());
        }
        source.validate()?;
        Ok(Self {
            source,
            floor_count,
            version,
        })
    }

    #[inline]
    pub fn source(&self) -> &'a HeatmapSource {
        self.source
    }

    #[inline]
    pub fn floor_count(&self) -> usize {
        self.floor_count
    }

    #[inline]
    pub fn version(&self) -> EncodingVersion {
        self.version
    }

    /// Resolve the source through `decoder` and decode its floors.
    #[cfg_attr(
        feature = "tracing",
        instrument(
            level = "info",
            skip(self, decoder),
            fields(source = %self.source, floors = self.floor_count)
        )
    )]
    pub async fn run<D: ImageDecoder + ?Sized>(self, decoder: &D) -> Result<Heatmap, HeatmapError> {
        let pixels = decoder
            .resolve(self.source)
            .await
            .inspect_err(|err| log::error!("{}: {err}", self.source))?;
        Ok(decode_pixels(&pixels, self.floor_count, self.version)?)
    }
}

/// Decode the heatmap image behind `source` into `floor_count` floors.
///
/// Unsupported versions, a zero floor count and malformed base64 payloads
/// are rejected before `decoder` is called.
pub async fn decode<D: ImageDecoder + ?Sized>(
    decoder: &D,
    source: &HeatmapSource,
    floor_count: usize,
    version: u32,
) -> Result<Heatmap, HeatmapError> {
    DecodeRequest::new(source, floor_count, version)?
        .run(decoder)
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use floorheat_core::PixelBuffer;
    use floorheat_source::SourceError;
    use log::{Level, LevelFilter, Log, Metadata, Record};
    use std::sync::Mutex;

    struct CapturingLogger(Mutex<Vec<String>>);

    impl Log for CapturingLogger {
        fn enabled(&self, metadata: &Metadata) -> bool {
            metadata.level() <= Level::Error
        }

        fn log(&self, record: &Record) {
            if self.enabled(record.metadata()) {
                if let Ok(mut lines) = self.0.lock() {
                    lines.push(record.args().to_string());
                }
            }
        }

        fn flush(&self) {}
    }

    static CAPTURED: CapturingLogger = CapturingLogger(Mutex::new(Vec::new()));

    struct Unreachable;

    #[async_trait]
    impl ImageDecoder for Unreachable {
        async fn resolve(&self, source: &HeatmapSource) -> Result<PixelBuffer, SourceError> {
            Err(SourceError::Fetch {
                url: source.to_string(),
                reason: "connection refused".to_string(),
            })
        }
    }

    #[tokio::test]
    async fn injected_decoder_failures_are_logged() {
        log::set_logger(&CAPTURED).expect("no other logger in this binary");
        log::set_max_level(LevelFilter::Error);

        let src = HeatmapSource::url("https://heatmaps.invalid/floor.jpg");
        let err = decode(&Unreachable, &src, 1, 1).await.unwrap_err();
        assert!(matches!(err, HeatmapError::Source(SourceError::Fetch { .. })));

        let lines = CAPTURED.0.lock().expect("log lines");
        assert!(
            lines
                .iter()
                .any(|l| l.contains("heatmaps.invalid") && l.contains("connection refused")),
            "missing error log in {lines:?}"
        );
    }
}
