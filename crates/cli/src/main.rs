use anyhow::{bail, Context};
use pokerblind_core::{
    builtin_content, classify, score_hand, Blind, Card, Content, Event, EventBus, GameConfig,
    HandKind, Profile, RngState, Round, RoundStatus, RuleEffect, ScoreBreakdown,
};
use pokerblind_data::{load_content, load_game_config};
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

const DEFAULT_ASSETS_DIR: &str = "assets";

#[derive(Debug, Clone, PartialEq, Eq)]
struct CliOptions {
    auto: bool,
    seed: Option<u64>,
    assets: Option<PathBuf>,
    rounds: Option<u32>,
}

fn parse_cli_options(args: &[String]) -> anyhow::Result<CliOptions> {
    let mut options = CliOptions {
        auto: false,
        seed: None,
        assets: None,
        rounds: None,
    };
    let mut idx = 0usize;
    while idx < args.len() {
        match args[idx].as_str() {
            "--auto" => options.auto = true,
            "--seed" => {
                let value = flag_value(args, idx, "--seed")?;
                options.seed = Some(
                    value
                        .parse::<u64>()
                        .with_context(|| format!("invalid seed {value:?}"))?,
                );
                idx += 1;
            }
            "--rounds" => {
                let value = flag_value(args, idx, "--rounds")?;
                options.rounds = Some(
                    value
                        .parse::<u32>()
                        .with_context(|| format!("invalid round count {value:?}"))?,
                );
                idx += 1;
            }
            "--assets" => {
                options.assets = Some(PathBuf::from(flag_value(args, idx, "--assets")?));
                idx += 1;
            }
            other => bail!("unknown argument {other:?} (expected --seed N, --assets DIR, --auto, --rounds N)"),
        }
        idx += 1;
    }
    Ok(options)
}

fn flag_value<'a>(args: &'a [String], idx: usize, flag: &str) -> anyhow::Result<&'a str> {
    args.get(idx + 1)
        .map(String::as_str)
        .with_context(|| format!("{flag} needs a value"))
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let options = parse_cli_options(&args)?;
    let (config, content) = load_assets(options.assets.as_deref())?;
    let mut rng = match options.seed {
        Some(seed) => RngState::from_seed(seed),
        None => RngState::from_entropy(),
    };
    println!("seed: {}", rng.seed());

    let mut profile = Profile::new(&config);
    let limit = options.rounds.unwrap_or(u32::MAX);
    if options.auto {
        run_auto(&mut profile, &content, &mut rng, limit);
        Ok(())
    } else {
        let stdin = io::stdin();
        let mut input = stdin.lock();
        run_interactive(&mut profile, &content, &mut rng, limit, &mut input)
    }
}

/// An explicit `--assets` directory must load; the default directory is
/// optional and the built-in rules stand in when it is absent.
fn load_assets(dir: Option<&Path>) -> anyhow::Result<(GameConfig, Content)> {
    match dir {
        Some(dir) => Ok((load_game_config(dir)?, load_content(dir)?)),
        None => {
            let dir = Path::new(DEFAULT_ASSETS_DIR);
            if dir.join("rules.json").exists() {
                Ok((load_game_config(dir)?, load_content(dir)?))
            } else {
                log::warn!("no {} directory, using built-in rules", DEFAULT_ASSETS_DIR);
                Ok((GameConfig::default(), builtin_content()))
            }
        }
    }
}

fn run_auto(profile: &mut Profile, content: &Content, rng: &mut RngState, limit: u32) {
    let mut events = EventBus::default();
    let mut cleared = 0u32;
    while cleared < limit {
        let blind = match profile.next_blind() {
            Ok(blind) => blind,
            Err(err) => {
                println!("{err}");
                break;
            }
        };
        print_blind(&blind);
        let status = auto_round(profile, blind, rng, &mut events);
        drain_events(&mut events);
        if status != RoundStatus::Won {
            break;
        }
        cleared += 1;
        reward_joker(profile, content, rng);
    }
    println!("blinds cleared: {cleared}");
}

fn auto_round(
    profile: &Profile,
    blind: Blind,
    rng: &mut RngState,
    events: &mut EventBus,
) -> RoundStatus {
    let mut round = Round::start(profile, blind, rng, events);
    while !round.is_done() {
        if let Err(err) = round.deal_to_hand(events) {
            println!("deal: {err}");
            break;
        }
        let picks = best_selection(&round, profile);
        if picks.is_empty() {
            break;
        }
        for idx in picks {
            if let Err(err) = round.select(idx) {
                println!("select: {err}");
            }
        }
        match round.play_hand(events) {
            Ok(outcome) => print_breakdown(&outcome.scoring, &outcome.breakdown),
            Err(err) => {
                println!("play: {err}");
                break;
            }
        }
        if !round.is_done() {
            if let Err(err) = round.discard(true, events) {
                println!("clear played: {err}");
                break;
            }
        }
        println!(
            "score {} / {} ({} hands left)",
            round.current_score(),
            round.target(),
            round.num_hands_remaining()
        );
    }
    round.status()
}

/// Exhaustive search over every selection the round allows, keeping the
/// highest scoring one.
fn best_selection(round: &Round<'_>, profile: &Profile) -> Vec<usize> {
    let hand = round.hand();
    let max = profile.rules.max_selected.min(hand.len());
    let mut best: (i64, Vec<usize>) = (-1, Vec::new());
    let mut current = Vec::new();
    search_selections(hand, 0, max, &mut current, &mut |picks: &[usize]| {
        let cards: Vec<Card> = picks.iter().map(|&idx| hand[idx]).collect();
        let eval = classify(&cards);
        let total = score_hand(
            eval.kind,
            &eval.scoring_cards(&cards),
            round.jokers(),
            &profile.levels,
        )
        .total_score();
        if total > best.0 {
            best = (total, picks.to_vec());
        }
    });
    best.1
}

fn search_selections(
    hand: &[Card],
    start: usize,
    max: usize,
    current: &mut Vec<usize>,
    visit: &mut dyn FnMut(&[usize]),
) {
    if !current.is_empty() {
        visit(current);
    }
    if current.len() == max {
        return;
    }
    for idx in start..hand.len() {
        current.push(idx);
        search_selections(hand, idx + 1, max, current, visit);
        current.pop();
    }
}

fn reward_joker(profile: &mut Profile, content: &Content, rng: &mut RngState) {
    if profile.inventory.is_full() {
        return;
    }
    if let Some(def) = content.pick_joker(rng) {
        let name = def.name.clone();
        match profile.add_joker(def.clone()) {
            Ok(()) => println!("reward: {name}"),
            Err(err) => println!("reward: {err}"),
        }
    }
}

fn run_interactive(
    profile: &mut Profile,
    content: &Content,
    rng: &mut RngState,
    limit: u32,
    input: &mut impl BufRead,
) -> anyhow::Result<()> {
    let mut events = EventBus::default();
    let mut played = 0u32;
    print_blind_menu(profile);
    while played < limit {
        let Some(line) = read_command(input, "blind> ")? else {
            return Ok(());
        };
        let mut parts = line.split_whitespace();
        let Some(command) = parts.next() else {
            continue;
        };
        match command {
            "next" | "n" => {
                let blind = match profile.next_blind() {
                    Ok(blind) => blind,
                    Err(err) => {
                        println!("{err}");
                        break;
                    }
                };
                print_blind(&blind);
                let Some(status) = play_round(profile, blind, rng, &mut events, input)? else {
                    return Ok(());
                };
                played += 1;
                match status {
                    RoundStatus::Won => {
                        println!("blind cleared");
                        reward_joker(profile, content, rng);
                    }
                    RoundStatus::Lost => {
                        println!("game over");
                        return Ok(());
                    }
                    RoundStatus::Active => {}
                }
                print_blind_menu(profile);
            }
            "skip" => {
                match profile.skip_blind(&mut events) {
                    Ok(blind) => println!("skipped {:?} blind", blind.kind),
                    Err(err) => println!("{err}"),
                }
                drain_events(&mut events);
                print_blind_menu(profile);
            }
            "levels" | "l" => print_levels(profile),
            "jokers" | "j" => {
                for (idx, joker) in profile.inventory.jokers.iter().enumerate() {
                    println!("{idx:>2}: {} ({})", joker.def.name, describe_effect(&joker.def.effect));
                }
            }
            "help" | "?" => println!("commands: next, skip, levels, jokers, quit"),
            "quit" | "q" | "exit" => return Ok(()),
            other => println!("unknown command {other:?}, try help"),
        }
    }
    println!("rounds played: {played}");
    Ok(())
}

/// Runs one blind from the prompt. `None` means the player quit.
fn play_round(
    profile: &Profile,
    blind: Blind,
    rng: &mut RngState,
    events: &mut EventBus,
    input: &mut impl BufRead,
) -> anyhow::Result<Option<RoundStatus>> {
    let mut round = Round::start(profile, blind, rng, events);
    if let Err(err) = round.deal_to_hand(events) {
        println!("deal: {err}");
    }
    drain_events(events);
    print_round(&round);

    while !round.is_done() {
        let Some(line) = read_command(input, "round> ")? else {
            return Ok(None);
        };
        let mut parts = line.split_whitespace();
        let Some(command) = parts.next() else {
            continue;
        };
        let args: Vec<&str> = parts.collect();
        match command {
            "state" | "s" => print_round(&round),
            "select" | "sel" => match parse_indices(&args) {
                Ok(indices) => {
                    for idx in indices {
                        if let Err(err) = round.select(idx) {
                            println!("{err}");
                        }
                    }
                    print_hand(&round);
                }
                Err(err) => println!("{err} (usage: select <idx> ...)"),
            },
            "play" | "p" => {
                match round.play_hand(events) {
                    Ok(outcome) => {
                        print_breakdown(&outcome.scoring, &outcome.breakdown);
                        if !round.is_done() {
                            refill(&mut round, true, events);
                        }
                    }
                    Err(err) => println!("{err}"),
                }
                drain_events(events);
                if !round.is_done() {
                    print_round(&round);
                }
            }
            "discard" | "x" => {
                refill(&mut round, false, events);
                drain_events(events);
                print_round(&round);
            }
            "sort" => match args.first().copied() {
                Some("suit") => {
                    round.sort(false);
                    print_hand(&round);
                }
                Some("rank") | None => {
                    round.sort(true);
                    print_hand(&round);
                }
                Some(other) => println!("unknown sort key {other:?} (rank or suit)"),
            },
            "jokers" | "j" => print_jokers(&round),
            "help" | "?" => {
                println!("commands: state, select <idx> ..., play, discard, sort [rank|suit], jokers, quit")
            }
            "quit" | "q" | "exit" => return Ok(None),
            other => println!("unknown command {other:?}, try help"),
        }
    }
    drain_events(events);
    Ok(Some(round.status()))
}

/// Clears the selection (as a discard or after a play) and deals back up
/// to the hand size.
fn refill(round: &mut Round<'_>, just_played: bool, events: &mut EventBus) {
    if let Err(err) = round.discard(just_played, events) {
        println!("{err}");
        return;
    }
    if let Err(err) = round.deal_to_hand(events) {
        println!("deal: {err}");
    }
}

fn read_command(input: &mut impl BufRead, prompt: &str) -> anyhow::Result<Option<String>> {
    print!("{prompt}");
    io::stdout().flush().context("flush stdout")?;
    let mut line = String::new();
    let read = input.read_line(&mut line).context("read command")?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Accepts `1 2 3`, `1,2,3` and ranges like `0-2`.
fn parse_indices(args: &[&str]) -> Result<Vec<usize>, String> {
    if args.is_empty() {
        return Err("missing indices".to_string());
    }
    let mut indices = Vec::new();
    for arg in args {
        for part in arg.split(',') {
            let part = part.trim();
            if part.is_empty() {
                continue;
            }
            if let Some((start, end)) = part.split_once('-') {
                let start = start
                    .trim()
                    .parse::<usize>()
                    .map_err(|_| "invalid range start".to_string())?;
                let end = end
                    .trim()
                    .parse::<usize>()
                    .map_err(|_| "invalid range end".to_string())?;
                if start > end {
                    return Err("range start larger than end".to_string());
                }
                indices.extend(start..=end);
            } else {
                indices.push(
                    part.parse::<usize>()
                        .map_err(|_| format!("invalid index {part:?}"))?,
                );
            }
        }
    }
    Ok(indices)
}

fn print_blind_menu(profile: &Profile) {
    let upcoming = profile.upcoming_blinds(3);
    if upcoming.is_empty() {
        println!("no blinds left");
        return;
    }
    println!(
        "round {} ante {}: next {:?} blind, upcoming targets {:?}",
        profile.round,
        profile.ante,
        profile.next_blind_kind(),
        upcoming
    );
}

fn print_blind(blind: &Blind) {
    println!(
        "== ante {} round {}: {:?} blind, target {} ==",
        blind.ante, blind.round, blind.kind, blind.target
    );
}

fn print_levels(profile: &Profile) {
    for kind in HandKind::ALL {
        let level = profile.levels.get(kind);
        println!(
            "{:<16} lvl {:>2}  {:>4} x {:<3}",
            kind.display_name(),
            level.level,
            level.chips,
            level.mult
        );
    }
}

fn print_round(round: &Round<'_>) {
    println!(
        "score {} / {} | hands {} | discards {} | deck {}",
        round.current_score(),
        round.target(),
        round.num_hands_remaining(),
        round.num_discards_remaining(),
        round.deck_remaining_count()
    );
    print_hand(round);
}

fn print_hand(round: &Round<'_>) {
    for (idx, card) in round.hand().iter().enumerate() {
        let marker = if card.selected { '*' } else { ' ' };
        println!("{marker}{idx:>2}  {:<4} {card}", card.short_name());
    }
    if round.num_selected() > 0 {
        println!("selection: {}", round.current_hand_type_of_selection());
    }
}

fn print_jokers(round: &Round<'_>) {
    if round.jokers().is_empty() {
        println!("no jokers");
        return;
    }
    for (idx, joker) in round.jokers().iter().enumerate() {
        let marker = if joker.scored { '*' } else { ' ' };
        println!(
            "{marker}{idx:>2}  {} ({})",
            joker.def.name,
            describe_effect(&joker.def.effect)
        );
    }
}

fn print_breakdown(scoring: &[Card], breakdown: &ScoreBreakdown) {
    let cards: Vec<String> = scoring.iter().map(Card::short_name).collect();
    println!("{}: {}", breakdown.hand, cards.join(" "));
    println!(
        "base {} x {}, card chips +{}",
        breakdown.base.chips, breakdown.base.mult, breakdown.card_chips
    );
    for step in &breakdown.trace {
        println!(
            "  {}: {} ({} x {} -> {} x {})",
            step.source,
            describe_effect(&step.effect),
            step.before.chips,
            step.before.mult,
            step.after.chips,
            step.after.mult
        );
    }
    println!(
        "total {} x {} = {}",
        breakdown.total.chips,
        breakdown.total.mult,
        breakdown.total_score()
    );
}

fn describe_effect(effect: &RuleEffect) -> String {
    match effect {
        RuleEffect::AddChips(value) => format!("+{value} chips"),
        RuleEffect::AddMult(value) => format!("+{value} mult"),
    }
}

fn drain_events(events: &mut EventBus) {
    for event in events.drain() {
        match event {
            Event::BlindCleared { score, target } => println!("cleared: {score} / {target}"),
            Event::BlindFailed { score, target } => println!("failed: {score} / {target}"),
            Event::BlindSkipped { ante, blind } => println!("skipped {blind:?} blind (ante {ante})"),
            Event::HandUpgraded { hand, level } => println!("{hand} is now level {level}"),
            other => log::debug!("event: {other:?}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|arg| arg.to_string()).collect()
    }

    #[test]
    fn parses_all_flags() {
        let options =
            parse_cli_options(&args(&["--seed", "42", "--auto", "--rounds", "2", "--assets", "x"]))
                .expect("options");
        assert_eq!(
            options,
            CliOptions {
                auto: true,
                seed: Some(42),
                assets: Some(PathBuf::from("x")),
                rounds: Some(2),
            }
        );
    }

    #[test]
    fn rejects_unknown_and_incomplete_flags() {
        assert!(parse_cli_options(&args(&["--cui"])).is_err());
        assert!(parse_cli_options(&args(&["--seed"])).is_err());
        assert!(parse_cli_options(&args(&["--seed", "abc"])).is_err());
    }

    #[test]
    fn parses_index_lists_and_ranges() {
        assert_eq!(parse_indices(&["0", "2,4"]), Ok(vec![0, 2, 4]));
        assert_eq!(parse_indices(&["1-3"]), Ok(vec![1, 2, 3]));
        assert!(parse_indices(&[]).is_err());
        assert!(parse_indices(&["3-1"]).is_err());
        assert!(parse_indices(&["x"]).is_err());
    }

    #[test]
    fn auto_play_finishes_the_round() {
        let mut profile = Profile::default();
        let mut rng = RngState::from_seed(3);
        let mut events = EventBus::default();
        let blind = profile.next_blind().expect("blind");
        let status = auto_round(&profile, blind, &mut rng, &mut events);
        assert_ne!(status, RoundStatus::Active);
        assert!(events
            .events()
            .iter()
            .any(|event| matches!(event, Event::BlindCleared { .. } | Event::BlindFailed { .. })));
    }

    #[test]
    fn best_selection_beats_every_single_card() {
        let profile = Profile::default();
        let mut rng = RngState::from_seed(5);
        let mut events = EventBus::default();
        let blind = Blind {
            ante: 1,
            round: 1,
            kind: pokerblind_core::BlindKind::Small,
            target: 300,
        };
        let mut round = Round::start(&profile, blind, &mut rng, &mut events);
        round.deal_to_hand(&mut events).expect("deal");
        let score_of = |cards: &[Card]| {
            let eval = classify(cards);
            score_hand(eval.kind, &eval.scoring_cards(cards), &[], &profile.levels).total_score()
        };

        let picks = best_selection(&round, &profile);
        assert!(!picks.is_empty() && picks.len() <= 5);
        let hand = round.hand();
        let cards: Vec<Card> = picks.iter().map(|&idx| hand[idx]).collect();
        let best = score_of(&cards);
        for idx in 0..hand.len() {
            assert!(best >= score_of(&hand[idx..=idx]));
        }
    }

    #[test]
    fn scripted_session_plays_a_hand() {
        let mut profile = Profile::default();
        let content = builtin_content();
        let mut rng = RngState::from_seed(11);
        let script = "n\nselect 0\nplay\nquit\n";
        let mut input = io::Cursor::new(script.as_bytes());
        run_interactive(&mut profile, &content, &mut rng, 1, &mut input).expect("session");
        assert_eq!(profile.round, 1);
    }
}
