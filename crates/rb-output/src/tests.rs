//! Integration tests for rb-output.

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use crate::csv::CsvWriter;
    use crate::row::{StatusRow, TickSummaryRow, TurnRow};
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn headers(path: std::path::PathBuf) -> Vec<String> {
        let mut rdr = csv::Reader::from_path(path).unwrap();
        rdr.headers().unwrap().iter().map(str::to_owned).collect()
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("tick_summaries.csv").exists());
        assert!(dir.path().join("status_snapshots.csv").exists());
        assert!(dir.path().join("turns.csv").exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        assert_eq!(
            headers(dir.path().join("tick_summaries.csv")),
            ["tick", "events_delivered", "agent_errors"]
        );
        assert_eq!(
            headers(dir.path().join("status_snapshots.csv")),
            ["tick", "energy", "x", "y", "heading", "gun_heading", "gun_heat"]
        );
        assert_eq!(headers(dir.path().join("turns.csv")), ["tick", "seq", "new_heading"]);
    }

    #[test]
    fn csv_rows_written() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_tick_summary(&TickSummaryRow { tick: 3, events_delivered: 2, agent_errors: 1 }).unwrap();
        w.write_status(&StatusRow {
            tick:        3,
            energy:      97.5,
            x:           18.0,
            y:           300.0,
            heading:     270.0,
            gun_heading: 0.0,
            gun_heat:    0.4,
        })
        .unwrap();
        w.write_turns(&[
            TurnRow { tick: 3, seq: 0, new_heading: 90.0 },
            TurnRow { tick: 3, seq: 1, new_heading: 270.5 },
        ])
        .unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("tick_summaries.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][1], "2");
        assert_eq!(&rows[0][2], "1");

        let mut rdr = csv::Reader::from_path(dir.path().join("status_snapshots.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(&rows[0][1], "97.5");
        assert_eq!(&rows[0][4], "270");

        let mut rdr = csv::Reader::from_path(dir.path().join("turns.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[1][1], "1");
        assert_eq!(&rows[1][2], "270.5");
    }

    #[test]
    fn csv_finish_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }

    #[test]
    fn csv_empty_turn_batch_ok() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_turns(&[]).unwrap();
    }

    #[test]
    fn missing_dir_errors() {
        let dir = tmp();
        assert!(CsvWriter::new(&dir.path().join("missing")).is_err());
    }
}

#[cfg(test)]
mod observer_tests {
    use std::io;

    use rb_behavior::{Agent, EvasionConfig, ReactiveEvasion, TurnLog};
    use rb_core::{RobotEvent, ScannedRobotEvent, Tick};
    use rb_host::{ArenaConfig, ErrorPolicy, RunConfig, RunnerBuilder};

    use crate::{
        CsvWriter, OutputError, OutputResult, OutputWriter, RunOutputObserver, StatusRow,
        TickSummaryRow, TurnRow,
    };

    fn scanned() -> RobotEvent {
        RobotEvent::ScannedRobot(ScannedRobotEvent {
            name:     "target".into(),
            energy:   100.0,
            bearing:  0.0,
            distance: 100.0,
            heading:  0.0,
            velocity: 0.0,
        })
    }

    /// Keeps rows in memory; optionally fails every summary write.
    #[derive(Default)]
    struct MemoryWriter {
        summaries:      Vec<TickSummaryRow>,
        statuses:       Vec<StatusRow>,
        turns:          Vec<TurnRow>,
        finished:       bool,
        fail_summaries: bool,
    }

    impl OutputWriter for MemoryWriter {
        fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
            if self.fail_summaries {
                return Err(OutputError::Io(io::Error::other(format!("disk full at {}", row.tick))));
            }
            self.summaries.push(*row);
            Ok(())
        }

        fn write_status(&mut self, row: &StatusRow) -> OutputResult<()> {
            self.statuses.push(*row);
            Ok(())
        }

        fn write_turns(&mut self, rows: &[TurnRow]) -> OutputResult<()> {
            self.turns.extend_from_slice(rows);
            Ok(())
        }

        fn finish(&mut self) -> OutputResult<()> {
            self.finished = true;
            Ok(())
        }
    }

    fn evasion_with_log() -> (ReactiveEvasion, TurnLog) {
        let log = TurnLog::new();
        let mut behavior = ReactiveEvasion::new(EvasionConfig::default()).unwrap();
        behavior.on_turn(log.clone());
        (behavior, log)
    }

    fn config(total_ticks: u64, snapshot_interval_ticks: u64) -> RunConfig {
        RunConfig {
            total_ticks,
            seed: 1,
            snapshot_interval_ticks,
            error_policy: ErrorPolicy::LogAndContinue,
        }
    }

    #[test]
    fn turns_tagged_with_tick_and_sequenced() {
        let (behavior, log) = evasion_with_log();
        let mut runner = RunnerBuilder::new(config(3, 0), Agent::live(behavior))
            .sandbox(ArenaConfig::default())
            .build()
            .unwrap();
        let mut obs = RunOutputObserver::new(MemoryWriter::default()).with_turn_log(log.clone());
        runner.run(&mut obs).unwrap();
        assert!(obs.take_error().is_none());

        let w = obs.into_writer();
        assert!(w.finished);
        assert_eq!(w.summaries.len(), 3);
        // Setup's turn to the reference heading lands on the first tick.
        let turns: Vec<(u64, u64, f64)> =
            w.turns.iter().map(|r| (r.tick, r.seq, r.new_heading)).collect();
        assert_eq!(
            turns,
            vec![(0, 0, 90.0), (0, 1, 100.0), (1, 2, 110.0), (2, 3, 120.0)]
        );
        assert!(log.is_empty());
    }

    #[test]
    fn agent_errors_counted_per_tick() {
        let (behavior, log) = evasion_with_log();
        let mut runner = RunnerBuilder::new(config(4, 0), Agent::live(behavior))
            .sandbox(ArenaConfig::default())
            .event(Tick(1), scanned())
            .event(Tick(2), scanned())
            .build()
            .unwrap();
        let mut obs = RunOutputObserver::new(MemoryWriter::default()).with_turn_log(log);
        runner.run(&mut obs).unwrap();

        let w = obs.into_writer();
        let errors: Vec<u64> = w.summaries.iter().map(|r| r.agent_errors).collect();
        assert_eq!(errors, vec![0, 0, 1, 0]);
        let delivered: Vec<u64> = w.summaries.iter().map(|r| r.events_delivered).collect();
        assert_eq!(delivered, vec![0, 1, 1, 0]);
    }

    #[test]
    fn halted_run_still_flushes_and_finishes() {
        let (behavior, log) = evasion_with_log();
        let halt = RunConfig { error_policy: ErrorPolicy::Halt, ..config(4, 0) };
        // The second scan fires into a gun that is still hot.
        let mut runner = RunnerBuilder::new(halt, Agent::live(behavior))
            .sandbox(ArenaConfig::default())
            .event(Tick(1), scanned())
            .event(Tick(2), scanned())
            .build()
            .unwrap();
        let mut obs = RunOutputObserver::new(MemoryWriter::default()).with_turn_log(log.clone());
        assert!(runner.run(&mut obs).is_err());
        assert!(obs.take_error().is_none());

        let w = obs.into_writer();
        assert!(w.finished);
        assert!(log.is_empty());
        let errors: Vec<u64> = w.summaries.iter().map(|r| r.agent_errors).collect();
        assert_eq!(errors, vec![0, 0, 1]);
        let turns: Vec<(u64, f64)> = w.turns.iter().map(|r| (r.tick, r.new_heading)).collect();
        assert_eq!(turns, vec![(0, 90.0), (0, 100.0), (1, 110.0), (2, 120.0)]);
    }

    #[test]
    fn snapshots_written_on_interval() {
        let (behavior, _log) = evasion_with_log();
        let mut runner = RunnerBuilder::new(config(6, 2), Agent::live(behavior))
            .sandbox(ArenaConfig::default())
            .build()
            .unwrap();
        let mut obs = RunOutputObserver::new(MemoryWriter::default());
        runner.run(&mut obs).unwrap();

        let w = obs.into_writer();
        let ticks: Vec<u64> = w.statuses.iter().map(|r| r.tick).collect();
        assert_eq!(ticks, vec![0, 2, 4]);
        assert_eq!(w.statuses[0].energy, 100.0);
        assert!(w.turns.is_empty());
    }

    #[test]
    fn first_write_error_kept() {
        let writer = MemoryWriter { fail_summaries: true, ..MemoryWriter::default() };
        let (behavior, _log) = evasion_with_log();
        let mut runner = RunnerBuilder::new(config(3, 0), Agent::live(behavior))
            .sandbox(ArenaConfig::default())
            .build()
            .unwrap();
        let mut obs = RunOutputObserver::new(writer);
        runner.run(&mut obs).unwrap();

        let err = obs.take_error().unwrap();
        assert!(err.to_string().contains("disk full at 0"));
        assert!(obs.take_error().is_none());
    }

    #[test]
    fn integration_csv() {
        let dir = tempfile::tempdir().unwrap();
        let (behavior, log) = evasion_with_log();
        let mut runner = RunnerBuilder::new(config(6, 2), Agent::live(behavior))
            .sandbox(ArenaConfig::default())
            .build()
            .unwrap();
        let writer = CsvWriter::new(dir.path()).unwrap();
        let mut obs = RunOutputObserver::new(writer).with_turn_log(log);
        runner.run(&mut obs).unwrap();
        assert!(obs.take_error().is_none());

        let count = |name: &str| {
            csv::Reader::from_path(dir.path().join(name)).unwrap().records().count()
        };
        assert_eq!(count("tick_summaries.csv"), 6);
        assert_eq!(count("status_snapshots.csv"), 3);
        assert_eq!(count("turns.csv"), 7);
    }
}
