use sign_gesture::config::Config;
use sign_gesture::frame::raw_frame::RawFrame;
use sign_gesture::gesture::aggregator::SequenceAggregator;
use sign_gesture::image_classifier::impl_fake::FakeImageClassifier;
use sign_gesture::image_classifier::impl_shared::SharedClassifier;
use sign_gesture::library::logger::impl_console::LoggerConsole;
use sign_gesture::library::logger::interface::Logger;
use std::sync::Arc;

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let config = Config::default();

    let logger = Arc::new(LoggerConsole::new(config.logger_timezone));

    let aggregator = SequenceAggregator::new(&config, logger.clone())?;

    let mut classifier = SharedClassifier::new(FakeImageClassifier::new(
        aggregator.labels().len(),
        logger.clone(),
    ));

    aggregator.check_classifier(&mut classifier)?;

    let paths: Vec<String> = std::env::args().skip(1).collect();
    if paths.is_empty() {
        logger.info("Usage: sign-gesture <frame image>...")?;
        return Ok(());
    }

    let mut frames = Vec::with_capacity(paths.len());
    for path in &paths {
        match std::fs::read(path) {
            Ok(bytes) => frames.push(RawFrame::Encoded(bytes)),
            Err(e) => logger.warn(&format!("Could not read {}: {}", path, e))?,
        }
    }

    let result = aggregator.aggregate_live(&frames, &mut classifier)?;

    logger.info(&format!(
        "Gesture: {} (agreement {:.0}%, labels {:?})",
        result.final_label,
        result.agreement_ratio * 100.0,
        result.per_frame_labels
    ))?;

    Ok(())
}
