//! Интеграционные тесты префлоп-резолвера (crate::preflop).

use std::collections::{HashMap, HashSet};
use std::path::PathBuf;

use poker_odds::config::PreflopConfig;
use poker_odds::domain::card::Card;
use poker_odds::preflop::*;

/// Чарт новой схемы, на котором проверяем обход ситуаций.
const MODERN_TABLE: &str = r#"{
    "metadata": { "source": "test" },
    "open_raise": {
        "IP": {
            "OR_2.5bb_vs_3B_4x": {
                "CO": { "raise": ["AKs", "KQs"], "fold": ["72o"] }
            },
            "4B_to_24bb": {
                "CO": { "4bet": ["AA"], "fold": ["AKs"] }
            }
        },
        "OOP": {
            "OR_2.5bb_vs_3B_3x": {
                "CO": { "raise": ["A5s"] },
                "SB": { "raise": { "A5s": 1.0, "K9s": 0.5 } }
            }
        }
    },
    "vs_open_raise": {
        "3bet_defend": {
            "BT_CO_MP_3x_vs_OR_2.5bb_vs_4B_to_24bb": {
                "BTN": { "3bet": ["QQ"], "call": ["JJ", "QQ", "TT"], "fold": ["JJ"] }
            }
        }
    },
    "notes": "kept on save"
}"#;

fn card(s: &str) -> Card {
    Card::parse(s).expect("valid test card")
}

fn modern() -> PreflopResolver {
    PreflopResolver::new(StrategyTable::from_json_str(MODERN_TABLE).expect("modern fixture"))
}

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("poker_odds_{}_{name}", std::process::id()))
}

#[test]
fn hand_notation_is_canonical() {
    assert_eq!(normalize_hand(&card("Kh"), &card("Ah")), "AKs");
    assert_eq!(normalize_hand(&card("Ah"), &card("Kd")), "AKo");
    assert_eq!(normalize_hand(&card("Qc"), &card("Qd")), "QQ");
    assert_eq!(normalize_hand(&card("9s"), &card("10s")), "T9s");
    assert_eq!(normalize_hand_strs("10c", "Jd").unwrap(), "JTo");
    assert!(normalize_hand_strs("Ah", "??").is_err());
}

#[test]
fn seat_positions_relative_to_dealer() {
    assert_eq!(seat_position(0, 6, 0).unwrap(), Position::Button);
    assert_eq!(seat_position(1, 6, 0).unwrap(), Position::SmallBlind);
    assert_eq!(seat_position(2, 6, 0).unwrap(), Position::BigBlind);
    assert_eq!(seat_position(3, 6, 0).unwrap(), Position::Early);
    assert_eq!(seat_position(4, 6, 0).unwrap(), Position::Middle);
    assert_eq!(seat_position(5, 6, 0).unwrap(), Position::Cutoff);

    // дилер не на нулевом месте
    assert_eq!(seat_position(3, 6, 2).unwrap(), Position::SmallBlind);
    assert_eq!(seat_position(1, 6, 2).unwrap(), Position::Cutoff);

    // 9 игроков: два места MP перед CO
    assert_eq!(seat_position(3, 9, 0).unwrap(), Position::Early);
    assert_eq!(seat_position(5, 9, 0).unwrap(), Position::Early);
    assert_eq!(seat_position(6, 9, 0).unwrap(), Position::Middle);
    assert_eq!(seat_position(7, 9, 0).unwrap(), Position::Middle);
    assert_eq!(seat_position(8, 9, 0).unwrap(), Position::Cutoff);

    // короткие столы
    assert_eq!(seat_position(1, 2, 0).unwrap(), Position::SmallBlind);
    assert_eq!(seat_position(2, 3, 0).unwrap(), Position::BigBlind);

    assert!(matches!(seat_position(0, 0, 0), Err(PreflopError::NoPlayers)));
}

#[test]
fn position_labels_and_legacy_mapping() {
    assert_eq!("btn".parse::<Position>().unwrap(), Position::Button);
    assert!("UTG+5".parse::<Position>().is_err());
    assert_eq!(Position::Cutoff.legacy(), LegacyPosition::Late);
    assert_eq!(LegacyPosition::from(Position::Middle), LegacyPosition::Middle);
    assert_eq!(PlayerBand::for_players(3).label(), "2-3");
    assert_eq!(PlayerBand::for_players(6).label(), "4-6");
    assert_eq!(PlayerBand::for_players(9).label(), "7-10");
}

#[test]
fn modern_schema_is_detected() {
    let table = StrategyTable::from_json_str(MODERN_TABLE).unwrap();
    assert_eq!(table.schema(), TableSchema::Modern);

    let legacy = StrategyTable::from_json_str(r#"{"AA": {"early": {"2-3": "raise"}}}"#).unwrap();
    assert_eq!(legacy.schema(), TableSchema::Legacy);

    assert!(matches!(
        StrategyTable::from_json_str("[1, 2]"),
        Err(PreflopError::NotAnObject)
    ));
}

#[test]
fn modern_open_raise() {
    let r = modern();
    let open = BettingContext::unopened();

    assert_eq!(r.recommend("AKs", Position::Cutoff, 6, open), Action::Raise);
    assert_eq!(r.recommend("72o", Position::Cutoff, 6, open), Action::Fold);
    // нет в IP - берём OOP
    assert_eq!(r.recommend("A5s", Position::Cutoff, 6, open), Action::Raise);
    // взвешенный список рук
    assert_eq!(r.recommend("K9s", Position::SmallBlind, 6, open), Action::Raise);
    // нигде нет
    assert_eq!(r.recommend("32o", Position::Early, 6, open), Action::Fold);
}

#[test]
fn modern_facing_raises() {
    let r = modern();
    let one_raise = BettingContext::new(true, 1);
    let two_raises = BettingContext::new(true, 2);

    // защита: порядок 3bet, fold, call
    assert_eq!(r.recommend("QQ", Position::Button, 6, one_raise), Action::ThreeBet);
    assert_eq!(r.recommend("JJ", Position::Button, 6, one_raise), Action::Fold);
    assert_eq!(r.recommend("TT", Position::Button, 6, one_raise), Action::Call);
    assert_eq!(r.recommend("AKs", Position::Cutoff, 6, one_raise), Action::Fold);

    // против 4-бета корзина `4bet` отдаётся как 3bet
    assert_eq!(r.recommend("AA", Position::Cutoff, 6, two_raises), Action::ThreeBet);
    assert_eq!(r.recommend("AKs", Position::Cutoff, 6, two_raises), Action::Fold);
}

/// Лишние и кривые записи новой схемы не ломают остальной чарт.
#[test]
fn modern_table_tolerates_odd_entries() {
    let table = StrategyTable::from_json_str(
        r#"{
            "metadata": {},
            "open_raise": {
                "IP": {
                    "description": "in position charts",
                    "OR_2.5bb_vs_3B_4x": {
                        "CO": { "raise": ["AKs", 42], "fold": "everything else" },
                        "BTN": "see CO"
                    }
                },
                "OOP": 7
            },
            "vs_open_raise": ["not", "a", "map"]
        }"#,
    )
    .unwrap();
    assert_eq!(table.schema(), TableSchema::Modern);

    let r = PreflopResolver::new(table);
    let open = BettingContext::unopened();
    assert_eq!(r.recommend("AKs", Position::Cutoff, 6, open), Action::Raise);
    assert_eq!(r.recommend("72o", Position::Cutoff, 6, open), Action::Fold);
    assert_eq!(r.recommend("AKs", Position::Button, 6, open), Action::Fold);
    assert_eq!(
        r.recommend("AKs", Position::Cutoff, 6, BettingContext::new(true, 1)),
        Action::Fold
    );
}

/// Служебные ключи и записи не той формы в старой схеме - просто промахи.
#[test]
fn legacy_table_tolerates_odd_entries() {
    let text = r#"{
        "version": 2,
        "AA": { "early": { "2-3": "raise" } },
        "KK": "all-in",
        "QQ": { "early": { "2-3": 3 } },
        "JJ": { "early": ["raise"] }
    }"#;
    let table = StrategyTable::from_json_str(text).unwrap();
    assert_eq!(table.schema(), TableSchema::Legacy);

    let r = PreflopResolver::new(table);
    let open = BettingContext::unopened();
    assert_eq!(r.recommend("AA", Position::Early, 3, open), Action::Raise);
    for hand in ["KK", "QQ", "JJ", "version"] {
        assert_eq!(r.recommend(hand, Position::Early, 3, open), Action::Fold);
    }

    // через load: таблица пользователя остаётся, встроенная не подставляется
    let path = temp_path("legacy_odd_entries.json");
    std::fs::write(&path, text).unwrap();
    let config = PreflopConfig {
        modern_table_path: None,
        legacy_table_path: Some(path.clone()),
    };
    let loaded = StrategyTable::load(&config);
    assert_ne!(loaded, StrategyTable::default());
    assert_eq!(
        PreflopResolver::new(loaded).recommend("AA", Position::Early, 3, open),
        Action::Raise
    );
    std::fs::remove_file(path).ok();
}

#[test]
fn legacy_default_strategy() {
    let r = PreflopResolver::default();
    let open = BettingContext::unopened();
    let raised = BettingContext::new(true, 1);

    assert_eq!(r.recommend("JJ", Position::Early, 6, open), Action::Call);
    // колл против рейза только с короткого списка
    assert_eq!(r.recommend("JJ", Position::Early, 6, raised), Action::Call);
    assert_eq!(r.recommend("TT", Position::Early, 6, raised), Action::Fold);
    // рейз против рейза превращается в 3-бет
    assert_eq!(r.recommend("JJ", Position::Button, 6, raised), Action::ThreeBet);
    assert_eq!(r.recommend("AA", Position::Button, 3, open), Action::AllIn);
    // руки вне таблицы
    assert_eq!(r.recommend("72o", Position::Button, 6, open), Action::Fold);
}

#[test]
fn legacy_custom_table_adjustments() {
    let table = StrategyTable::from_json_str(
        r#"{
            "AA": { "early": { "2-3": "raise" } },
            "QQ": { "early": { "2-3": "raise" } },
            "K2o": { "late": { "7-10": "limp" } }
        }"#,
    )
    .unwrap();
    let r = PreflopResolver::new(table);
    let two_raises = BettingContext::new(true, 2);

    assert_eq!(r.recommend("AA", Position::Early, 3, two_raises), Action::AllIn);
    assert_eq!(r.recommend("QQ", Position::Early, 3, two_raises), Action::ThreeBet);
    assert_eq!(r.recommend("AA", Position::Early, 3, BettingContext::unopened()), Action::Raise);
    // неизвестная метка действия
    assert_eq!(r.recommend("K2o", Position::Cutoff, 9, BettingContext::unopened()), Action::Fold);
    // нет такой колонки
    assert_eq!(r.recommend("AA", Position::Early, 9, BettingContext::unopened()), Action::Fold);
}

#[test]
fn recommend_for_cards_combines_everything() {
    let r = PreflopResolver::default();
    let rec = r
        .recommend_for_cards(&card("Jh"), &card("Jd"), 3, 0, 6, BettingContext::unopened())
        .unwrap();

    assert_eq!(rec.hand, "JJ");
    assert_eq!(rec.position, Position::Early);
    assert_eq!(rec.action, Action::Call);
    assert_eq!(rec.description, "Match the bet (Call)");

    assert!(r
        .recommend_for_cards(&card("Jh"), &card("Jd"), 0, 0, 0, BettingContext::unopened())
        .is_err());
}

#[test]
fn action_descriptions() {
    assert_eq!(describe("fold"), "Give up the hand (Fold)");
    assert_eq!(describe("3bet"), "Re-raise (3-Bet)");
    assert_eq!(describe("all-in"), "Put the whole stack in (All-in)");
    assert_eq!(describe("limp"), "limp");
    assert_eq!("4bet".parse::<Action>().unwrap(), Action::FourBet);
    assert_eq!(Action::AllIn.to_string(), "all-in");
}

/// Нет файлов или файл не той схемы - встроенная таблица.
#[test]
fn load_falls_back_to_builtin_table() {
    let missing = PreflopConfig {
        modern_table_path: Some(temp_path("missing_modern.json")),
        legacy_table_path: Some(temp_path("missing_legacy.json")),
    };
    assert_eq!(StrategyTable::load(&missing), StrategyTable::default());

    let legacy_path = temp_path("legacy_as_modern.json");
    std::fs::write(&legacy_path, r#"{"AA": {"early": {"2-3": "raise"}}}"#).unwrap();
    let wrong_schema = PreflopConfig {
        modern_table_path: Some(legacy_path.clone()),
        legacy_table_path: None,
    };
    assert_eq!(StrategyTable::load(&wrong_schema), StrategyTable::default());

    let legacy_ok = PreflopConfig {
        modern_table_path: None,
        legacy_table_path: Some(legacy_path.clone()),
    };
    assert_eq!(StrategyTable::load(&legacy_ok).schema(), TableSchema::Legacy);
    assert_ne!(StrategyTable::load(&legacy_ok), StrategyTable::default());

    std::fs::remove_file(legacy_path).ok();
}

#[test]
fn tables_survive_save_and_load() {
    let modern_path = temp_path("modern_roundtrip.json");
    let table = StrategyTable::from_json_str(MODERN_TABLE).unwrap();
    table.save_to_file(&modern_path).unwrap();

    let config = PreflopConfig {
        modern_table_path: Some(modern_path.clone()),
        legacy_table_path: None,
    };
    assert_eq!(StrategyTable::load(&config), table);

    let legacy_path = temp_path("legacy_roundtrip.json");
    let builtin = StrategyTable::default();
    builtin.save_to_file(&legacy_path).unwrap();
    assert_eq!(StrategyTable::from_file(&legacy_path).unwrap(), builtin);

    std::fs::remove_file(modern_path).ok();
    std::fs::remove_file(legacy_path).ok();
}

#[test]
fn betting_context_from_seat_actions() {
    // 6 игроков, дилер 0, мы на месте 4: до нас ходят места 1, 2, 3
    let mut actions = HashMap::new();
    actions.insert(1, Action::Call);
    actions.insert(3, Action::Raise);
    actions.insert(5, Action::ThreeBet);

    let ctx = BettingContext::from_seat_actions(&actions, 0, 4, 6);
    assert!(ctx.has_prior_raise);
    assert!(ctx.has_prior_call);
    assert_eq!(ctx.num_prior_raises, 1);

    actions.insert(2, Action::ThreeBet);
    let ctx = BettingContext::from_seat_actions(&actions, 0, 4, 6);
    assert_eq!(ctx.num_prior_raises, 3);

    actions.insert(3, Action::FourBet);
    let ctx = BettingContext::from_seat_actions(&actions, 0, 4, 6);
    assert_eq!(ctx.num_prior_raises, 5);

    // первыми ходим мы
    let ctx = BettingContext::from_seat_actions(&actions, 0, 1, 6);
    assert_eq!(ctx, BettingContext::unopened());
    assert!(!ctx.faces_raise());
}

#[test]
fn active_players_exclude_folded() {
    let folded: HashSet<_> = [1, 2, 7].into_iter().collect();
    assert_eq!(active_player_count(6, &folded, 0), 4);
    // себя не вычитаем
    assert_eq!(active_player_count(6, &folded, 1), 5);

    let everyone: HashSet<_> = (0..3).collect();
    assert_eq!(active_player_count(3, &everyone, 0), 1);
}
