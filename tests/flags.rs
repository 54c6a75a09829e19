use tintlog::Flags;

#[test]
fn std_is_date_and_ansi() {
    assert_eq!(Flags::STD, Flags::DATE | Flags::ANSI);
    assert!(Flags::STD.contains(Flags::DATE));
    assert!(Flags::STD.contains(Flags::ANSI));
    assert!(!Flags::STD.contains(Flags::SHORT_FILE));
}

#[test]
fn bit_values_are_stable() {
    assert_eq!(Flags::DATE.bits(), 1);
    assert_eq!(Flags::LONG_FILE.bits(), 2);
    assert_eq!(Flags::SHORT_FILE.bits(), 4);
    assert_eq!(Flags::ANSI.bits(), 8);
}

#[test]
fn wants_caller_for_either_file_flag() {
    assert!(!Flags::STD.wants_caller());
    assert!(Flags::LONG_FILE.wants_caller());
    assert!((Flags::DATE | Flags::SHORT_FILE).wants_caller());
}

#[test]
fn from_bits_drops_unknown_bits() {
    assert_eq!(Flags::from_bits(0xff).bits(), 0b1111);
    assert_eq!(!Flags::NONE, Flags::from_bits(0b1111));
}

#[test]
fn names_round_trip_through_config_form() {
    let flags = Flags::from_names(["date", "shortfile"]).unwrap();
    assert_eq!(flags, Flags::DATE | Flags::SHORT_FILE);
    assert_eq!(flags.names(), vec!["date", "shortfile"]);
    assert_eq!(flags.to_string(), "date|shortfile");
}

#[test]
fn unknown_flag_name_is_rejected() {
    let err = Flags::from_names(["date", "colour"]).unwrap_err();
    assert!(matches!(err, tintlog::Error::InvalidFlag(name) if name == "colour"));
}

#[test]
fn empty_name_list_is_none() {
    let flags = Flags::from_names(Vec::<String>::new()).unwrap();
    assert!(flags.is_empty());
}
