use log::{Level, LevelFilter, Log, Metadata, Record};
use pokerblind_core::{Blind, BlindKind, EventBus, Profile, RngState, Round};
use std::sync::Mutex;

struct CaptureLogger {
    lines: Mutex<Vec<(Level, String)>>,
}

impl Log for CaptureLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        if let Ok(mut lines) = self.lines.lock() {
            lines.push((record.level(), record.args().to_string()));
        }
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger {
    lines: Mutex::new(Vec::new()),
};

fn captured() -> Vec<(Level, String)> {
    LOGGER.lines.lock().expect("log lines").clone()
}

// One test per file: the logger is process-global.
#[test]
fn round_operations_log_at_debug_and_info() {
    log::set_logger(&LOGGER).expect("install logger");
    log::set_max_level(LevelFilter::Debug);

    let profile = Profile::default();
    let mut rng = RngState::from_seed(9);
    let mut events = EventBus::default();
    let blind = Blind {
        ante: 1,
        round: 1,
        kind: BlindKind::Small,
        target: 300,
    };
    let mut round = Round::start(&profile, blind, &mut rng, &mut events);
    round.deal_to_hand(&mut events).expect("deal");
    round.select(2).expect("select");
    round.select(2).expect("deselect");
    round.select(4).expect("select");
    round.discard(false, &mut events).expect("discard");

    let lines = captured();
    assert!(lines
        .iter()
        .any(|(level, line)| *level == Level::Debug && line == "card 2 selected: true"));
    assert!(lines
        .iter()
        .any(|(level, line)| *level == Level::Debug && line == "card 2 selected: false"));
    assert!(lines
        .iter()
        .any(|(level, line)| *level == Level::Debug && line.starts_with("dealt 8 cards")));
    assert!(lines
        .iter()
        .any(|(level, line)| *level == Level::Debug && line.starts_with("discarded 1 cards")));
    assert!(lines
        .iter()
        .any(|(level, line)| *level == Level::Info && line.starts_with("blind started")));
    assert!(lines.iter().all(|(level, _)| *level > Level::Warn));
}
