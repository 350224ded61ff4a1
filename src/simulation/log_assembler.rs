//! Batch assembly of the event log
//!
//! The LogAssembler runs the case generator over every configured case, in
//! order, from a random source seeded with the configured seed. Assembling twice
//! with the same configuration yields identical logs.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Instant;
use tracing::{debug, info, instrument};

use crate::events::{Case, CaseGenerator, ProcessEvent};
use crate::output::LogSink;
use crate::reference::ReferenceData;
use crate::simulation::{GenerationResult, LogStatistics};
use crate::types::{CaseId, GeneratorConfig};

/// The two generated datasets
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventLog {
    /// Events of all cases, concatenated in case-generation order
    pub events: Vec<ProcessEvent>,
    /// One summary per case, in generation order
    pub cases: Vec<Case>,
}

impl EventLog {
    /// Number of cases
    pub fn case_count(&self) -> usize {
        self.cases.len()
    }

    /// Number of events
    pub fn event_count(&self) -> usize {
        self.events.len()
    }

    /// Events owned by one case, in generation order
    pub fn events_for(&self, case_id: CaseId) -> impl Iterator<Item = &ProcessEvent> + '_ {
        self.events.iter().filter(move |e| e.case_id == case_id)
    }

    /// Summary statistics of this log
    pub fn statistics(&self) -> LogStatistics {
        LogStatistics::from_records(&self.cases, &self.events)
    }
}

/// Runs the case generator over N cases and hands the result to a sink
#[derive(Debug, Clone)]
pub struct LogAssembler {
    config: GeneratorConfig,
    generator: CaseGenerator,
}

impl LogAssembler {
    /// Create an assembler, validating configuration and reference data
    #[instrument(skip(config, reference), fields(case_count = config.case_count, seed = config.seed))]
    pub fn new(config: GeneratorConfig, reference: ReferenceData) -> GenerationResult<Self> {
        config.validate()?;
        let generator = CaseGenerator::new(&config, reference)?;

        info!(
            "Initialized log assembler for {} cases between {} and {} (seed {})",
            config.case_count, config.start_date, config.end_date, config.seed
        );
        Ok(Self { config, generator })
    }

    /// Create an assembler with the reference data named by the configuration
    ///
    /// Falls back to the built-in tables when no reference file is configured.
    pub fn from_config(config: GeneratorConfig) -> GenerationResult<Self> {
        let reference = match &config.reference_data {
            Some(path) => {
                info!("Loading reference data from {}", path);
                ReferenceData::from_file(path)?
            }
            None => ReferenceData::built_in(),
        };
        Self::new(config, reference)
    }

    /// Configuration the assembler was built with
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Case generator used for every case
    pub fn generator(&self) -> &CaseGenerator {
        &self.generator
    }

    /// Generate the complete log from the configured seed
    pub fn assemble(&self) -> GenerationResult<EventLog> {
        let mut rng = StdRng::seed_from_u64(self.config.seed);
        self.assemble_with(&mut rng)
    }

    /// Generate the complete log from an explicit random source
    #[instrument(skip(self, rng), fields(case_count = self.config.case_count))]
    pub fn assemble_with<R: Rng + ?Sized>(&self, rng: &mut R) -> GenerationResult<EventLog> {
        let mut log = EventLog {
            events: Vec::with_capacity(self.config.case_count * 8),
            cases: Vec::with_capacity(self.config.case_count),
        };

        for case_index in 0..self.config.case_count {
            let generated = self.generator.generate_case(case_index, rng)?;
            log.events.extend(generated.events);
            log.cases.push(generated.case);

            if (case_index + 1) % 1000 == 0 {
                debug!("Generated {} of {} cases", case_index + 1, self.config.case_count);
            }
        }

        info!("Assembled {} cases with {} events", log.case_count(), log.event_count());
        Ok(log)
    }

    /// Generate the log, write it to the sink, and report statistics
    #[instrument(skip(self, sink))]
    pub fn run<S: LogSink + ?Sized>(&self, sink: &mut S) -> GenerationResult<LogStatistics> {
        let start_time = Instant::now();

        let log = self.assemble()?;
        sink.write_events(&log.events)?;
        sink.write_cases(&log.cases)?;
        sink.finish()?;

        let mut statistics = log.statistics();
        for destination in sink.destinations() {
            statistics.add_output_destination(destination);
        }
        statistics.set_generation_duration(start_time.elapsed());

        info!("Generation completed: {}", statistics.compact_summary());
        Ok(statistics)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::JsonLinesLogSink;
    use crate::simulation::GenerationError;

    fn config(case_count: usize) -> GeneratorConfig {
        GeneratorConfig { case_count, ..GeneratorConfig::default() }
    }

    #[test]
    fn test_assemble_produces_configured_case_count() {
        let assembler = LogAssembler::new(config(25), ReferenceData::built_in()).unwrap();
        let log = assembler.assemble().unwrap();

        assert_eq!(log.case_count(), 25);
        let expected_events: usize = log
            .cases
            .iter()
            .map(|c| assembler.generator().reference().variant(&c.variant).unwrap().activities.len())
            .sum();
        assert_eq!(log.event_count(), expected_events);
    }

    #[test]
    fn test_events_are_grouped_by_case_in_generation_order() {
        let assembler = LogAssembler::new(config(20), ReferenceData::built_in()).unwrap();
        let log = assembler.assemble().unwrap();

        let mut seen = Vec::new();
        for event in &log.events {
            if seen.last() != Some(&event.case_id) {
                assert!(!seen.contains(&event.case_id), "case events are not contiguous");
                seen.push(event.case_id);
            }
        }
        let case_order: Vec<CaseId> = log.cases.iter().map(|c| c.case_id).collect();
        assert_eq!(seen, case_order);
    }

    #[test]
    fn test_assemble_is_repeatable() {
        let assembler = LogAssembler::new(config(10), ReferenceData::built_in()).unwrap();
        assert_eq!(assembler.assemble().unwrap(), assembler.assemble().unwrap());
    }

    #[test]
    fn test_different_seeds_differ() {
        let first = LogAssembler::new(config(10), ReferenceData::built_in()).unwrap();
        let second =
            LogAssembler::new(GeneratorConfig { seed: 43, ..config(10) }, ReferenceData::built_in())
                .unwrap();
        assert_ne!(first.assemble().unwrap(), second.assemble().unwrap());
    }

    #[test]
    fn test_invalid_config_fails_fast() {
        let result = LogAssembler::new(config(0), ReferenceData::built_in());
        assert!(matches!(result, Err(GenerationError::ConfigurationError(_))));
    }

    #[test]
    fn test_missing_reference_file_fails_fast() {
        let config = GeneratorConfig {
            reference_data: Some("does/not/exist.json".to_string()),
            ..config(5)
        };
        let result = LogAssembler::from_config(config);
        assert!(matches!(result, Err(GenerationError::ReferenceDataError(_))));
    }

    #[test]
    fn test_run_writes_to_sink_and_reports() {
        let assembler = LogAssembler::new(config(15), ReferenceData::built_in()).unwrap();
        let mut sink = JsonLinesLogSink::new(Vec::new(), Vec::new())
            .with_destinations(vec!["memory".to_string()]);

        let statistics = assembler.run(&mut sink).unwrap();
        let (events_out, cases_out) = sink.into_inner().unwrap();

        assert_eq!(statistics.total_cases, 15);
        assert_eq!(String::from_utf8(cases_out).unwrap().lines().count(), 15);
        assert_eq!(
            String::from_utf8(events_out).unwrap().lines().count(),
            statistics.total_events
        );
        assert_eq!(statistics.on_time_cases + statistics.late_cases, 15);
        assert_eq!(statistics.output_destinations, vec!["memory".to_string()]);
    }
}
