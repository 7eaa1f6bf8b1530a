//! Unit tests for the tone table, errors and small helpers.
use dialflow::prelude::*;

#[test]
fn test_dtmf_table() {
    let generator = ToneGenerator::default();
    let expected = [
        ('1', 697.0, 1209.0),
        ('2', 697.0, 1336.0),
        ('3', 697.0, 1477.0),
        ('4', 770.0, 1209.0),
        ('5', 770.0, 1336.0),
        ('6', 770.0, 1477.0),
        ('7', 852.0, 1209.0),
        ('8', 852.0, 1336.0),
        ('9', 852.0, 1477.0),
        ('*', 941.0, 1209.0),
        ('0', 941.0, 1336.0),
        ('#', 941.0, 1477.0),
        ('A', 697.0, 1633.0),
        ('D', 941.0, 1633.0),
    ];
    for (key, low, high) in expected {
        let tone = generator.tone_for(DtmfSymbol::try_from(key).unwrap());
        assert_eq!((tone.freq_low, tone.freq_high), (low, high), "key {}", key);
        assert_eq!(tone.duration_ms, 200);
    }
}

#[test]
fn test_every_symbol_has_its_own_tone() {
    let generator = ToneGenerator::default();
    let pairs: Vec<(u32, u32)> = DtmfSymbol::ALL
        .into_iter()
        .map(|s| {
            let tone = generator.tone_for(s);
            (tone.freq_low as u32, tone.freq_high as u32)
        })
        .collect();

    for (i, pair) in pairs.iter().enumerate() {
        assert!(!pairs[i + 1..].contains(pair), "{:?} is shared", pair);
    }
    assert_eq!(pairs[12..], [(697, 1633), (770, 1633), (852, 1633), (941, 1633)]);
}

#[test]
fn test_tone_synthesis() {
    let generator = ToneGenerator::new(50);
    let tone = generator.tone_for(DtmfSymbol::Five);
    let samples = generator.synthesize(&tone, 8000);

    assert_eq!(samples.len(), 400);
    assert_eq!(samples[0], 0.0);
    assert!(samples.iter().all(|s| (-1.0..=1.0).contains(s)));
    assert!(samples.iter().any(|s| s.abs() > 0.5));
}

#[test]
fn test_normalize_input() {
    assert_eq!(normalize_input("  Billing PLEASE \n"), "billing please");
    assert_eq!(normalize_input("#"), "#");
}

#[test]
fn test_matching_mode_parsing() {
    assert_eq!("exact".parse::<MatchingMode>(), Ok(MatchingMode::Exact));
    assert_eq!(" Substring".parse::<MatchingMode>(), Ok(MatchingMode::Substring));
    assert!("fuzzy".parse::<MatchingMode>().is_err());
    assert_eq!(MatchingMode::default(), MatchingMode::Exact);
    assert_eq!(MatchingMode::Substring.to_string(), "substring");
}

#[test]
fn test_reject_reason_display() {
    assert_eq!(RejectReason::InvalidInput.to_string(), "invalid_input");
}

#[test]
fn test_error_display() {
    let err = CompileError::NodeNotFound {
        missing_node_id: "node_B".to_string(),
        source_node_id: "node_A".to_string(),
    };
    assert!(err.to_string().contains("node_B"));
    assert!(err.to_string().contains("node_A"));

    let err = CompileError::InvalidOption {
        node_id: "start".to_string(),
        key: "1".to_string(),
        message: "key is used by more than one option".to_string(),
    };
    assert!(err.to_string().contains("start"));
    assert!(err.to_string().contains("more than one"));

    let err = SymbolError::InvalidSymbol("x".to_string());
    assert!(err.to_string().contains("not a DTMF keypad symbol"));
}
