//! Search loop and the plain/enhanced retry.
//!
//! One pass runs edge detection, contour extraction and candidate filtering,
//! then tries every corner triple of every explorable depth bucket until the
//! decoder accepts a clip. The enhanced pass only runs when the plain pass
//! found nothing.

use std::fmt;

use image::RgbImage;

use crate::config::LocatorConfig;
use crate::decoder::ClipDecoder;
use crate::detector::candidate::{explorable_buckets, filter_candidates};
use crate::detector::contour::extract_contours;
use crate::detector::preprocess::prepare;
use crate::detector::transform::rectify;
use crate::detector::triangle::validate_triangle;
use crate::diagnostics::Diagnostics;
use crate::models::{Candidate, CornerTriple};

/// Pre-processing variant of a search pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pass {
    /// Blur then Canny
    Plain,
    /// Blur, fixed threshold, then Canny
    Enhanced,
}

impl Pass {
    /// Lowercase name, also used as the diagnostics file prefix
    pub fn name(self) -> &'static str {
        match self {
            Pass::Plain => "plain",
            Pass::Enhanced => "enhanced",
        }
    }

    fn is_enhanced(self) -> bool {
        self == Pass::Enhanced
    }
}

impl fmt::Display for Pass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Stage counters for one pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PassTelemetry {
    /// Contours traced in the edge map
    pub contours: usize,
    /// Square contours deep enough to be finder patterns
    pub candidates: usize,
    /// Depth buckets with an explorable member count
    pub buckets_explored: usize,
    /// Corner triples examined
    pub triples_tested: usize,
    /// Triples that passed the right-triangle test
    pub triples_accepted: usize,
    /// Rectified clips handed to the decoder
    pub decoder_calls: usize,
}

/// Outcome of a full search with per-pass counters
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DecodeReport {
    /// Decoded text, if any pass succeeded
    pub text: Option<String>,
    /// Pass that produced `text`
    pub pass: Option<Pass>,
    /// Counters of the plain pass
    pub plain: PassTelemetry,
    /// Counters of the enhanced pass, if it ran
    pub enhanced: Option<PassTelemetry>,
}

impl DecodeReport {
    /// True if a code was decoded
    pub fn is_found(&self) -> bool {
        self.text.is_some()
    }
}

/// Everything a pass needs besides the pass itself
pub(crate) struct Search<'a, D: ?Sized> {
    pub source: &'a RgbImage,
    pub decoder: &'a D,
    pub config: &'a LocatorConfig,
    pub diagnostics: &'a Diagnostics,
}

impl<D: ClipDecoder + ?Sized> Search<'_, D> {
    /// Plain pass, then the enhanced pass if nothing was found
    pub fn run(&self) -> DecodeReport {
        let mut report = DecodeReport::default();

        if let Some(text) = self.run_pass(Pass::Plain, &mut report.plain) {
            report.text = Some(text);
            report.pass = Some(Pass::Plain);
            return report;
        }

        tracing::info!("not found, try threshold");
        let mut enhanced = PassTelemetry::default();
        if let Some(text) = self.run_pass(Pass::Enhanced, &mut enhanced) {
            report.text = Some(text);
            report.pass = Some(Pass::Enhanced);
        }
        report.enhanced = Some(enhanced);
        report
    }

    fn run_pass(&self, pass: Pass, tel: &mut PassTelemetry) -> Option<String> {
        let edges = prepare(self.source, pass.is_enhanced(), self.config, self.diagnostics);
        let (contours, hierarchy) = extract_contours(&edges);
        tel.contours = contours.len();

        let buckets = filter_candidates(&contours, &hierarchy, self.config);
        tel.candidates = buckets.candidate_count();

        for (depth, members) in explorable_buckets(&buckets, self.config) {
            tel.buckets_explored += 1;
            tracing::debug!(%pass, depth, members = members.len(), "exploring depth bucket");
            if let Some(text) = self.reconstruct(pass, members, tel) {
                tracing::debug!(%pass, depth, "decoded");
                return Some(text);
            }
        }

        tracing::debug!(%pass, ?tel, "pass found nothing");
        None
    }

    /// Try every `i < j < k` triple of `candidates`, stopping at the first
    /// decoded clip
    pub fn reconstruct(
        &self,
        pass: Pass,
        candidates: &[Candidate],
        tel: &mut PassTelemetry,
    ) -> Option<String> {
        let n = candidates.len();
        for i in 0..n {
            for j in (i + 1)..n {
                for k in (j + 1)..n {
                    let (a, b, c) = (&candidates[i], &candidates[j], &candidates[k]);
                    let ids = [a.contour, b.contour, c.contour];
                    let triple = CornerTriple::new(a.center(), b.center(), c.center());
                    tel.triples_tested += 1;

                    if self.diagnostics.is_enabled() {
                        self.diagnostics.save_triangle(
                            &artifact_name(pass, "triple", ids),
                            self.source,
                            &triple,
                        );
                    }

                    let Some(canonical) = validate_triangle(triple, self.config) else {
                        continue;
                    };
                    tel.triples_accepted += 1;

                    let clip = match rectify(self.source, &canonical, self.config) {
                        Ok(clip) => clip,
                        Err(err) => {
                            tracing::debug!(%err, triple = ?ids, "rectification failed");
                            continue;
                        }
                    };
                    if self.diagnostics.is_enabled() {
                        self.diagnostics
                            .save_rgb(&artifact_name(pass, "match", ids), &clip.image);
                    }

                    tracing::trace!(triple = ?ids, corners = ?clip.corners, "decoding clip");
                    tel.decoder_calls += 1;
                    match self.decoder.decode(&clip.image) {
                        Some(text) if !text.is_empty() => return Some(text),
                        _ => {}
                    }
                }
            }
        }
        None
    }
}

/// `{pass}-{kind}-{i}-{j}-{k}.png`, keyed by contour indices
fn artifact_name(pass: Pass, kind: &str, [i, j, k]: [usize; 3]) -> String {
    format!("{pass}-{kind}-{i}-{j}-{k}.png")
}
