//! Two-letter field codes used in raw in-play records.
//!
//! Several codes are overloaded by the provider depending on the record
//! `type`; their names join the alternatives (`BET_TYPE_PULL_COMPETITION_CODE`).

/// `(code, name)` pairs sorted by code.
pub static MNEMONICS: &[(&str, &str)] = &[
    ("3P", "PLACE_365"),
    ("3W", "WIN_365"),
    ("4Q", "MARKET_GROUP_PAIR_ID"),
    ("AB", "FINANCIALS_PRICE_1"),
    ("AC", "STATS_COLUMN"),
    ("AD", "ADDITIONAL_DATA_TEAM_TOUCHDOWN_QUOTE"),
    ("AE", "STATS_CELL"),
    ("AF", "ARCHIVE_FIXTURE_INFO"),
    ("AH", "ASIAN_HOVER_FINANCIALS_MARKET_ODDS_1"),
    ("AI", "ANIMATION_ID"),
    ("AJ", "FINANCIALS_MARKET_ODDS_2"),
    ("AM", "ANIMATION_ICON"),
    ("AO", "ANIMATION_TOPIC"),
    ("AP", "STATS_PANE"),
    ("AQ", "FINANCIALS_CLOSE_TIME"),
    ("AS", "ADDITIONAL_STATS_ANIMATION_SOUND_TEAM_FIELDGOAL_QUOTE"),
    ("AT", "ANIMATION_TEXT_STATS_TAB"),
    ("AU", "AUDIO_AVAILABLE"),
    ("AV", "ARCHIVE_VIDEO_AVAILABLE"),
    ("BB", "BUTTON_BAR"),
    ("BC", "BOOK_CLOSES_CLOSE_BETS_COUNT"),
    ("BD", "PULL_BET_DATA"),
    ("BE", "BET"),
    ("BH", "BLURB_HEADER"),
    ("BI", "BUTTON_BAR_INDEX_BUTTON_SPLIT_INDEX"),
    ("BL", "BASE_LINE"),
    ("BO", "BASE_ODDS_OPEN_BETS_COUNT"),
    ("BS", "BANNER_STYLE"),
    ("BT", "INFO_POD_DETAIL_2"),
    ("C1", "C1_ID_MINI_DIARY_C1"),
    ("C2", "C2_ID_MINI_DIARY_C2"),
    ("C3", "MINI_DIARY_C3"),
    ("CB", "CLOSE_BETS"),
    ("CC", "BET_TYPE_PULL_COMPETITION_CODE"),
    ("CD", "COMPETITION_DROPDOWN_FINANCIALS_TRADE"),
    ("CF", "CONFIG"),
    ("CG", "GLOBAL_CONFIG"),
    ("CI", "CLASS_ID_MINI_DIARY_CUP_ICON"),
    ("CK", "COMPETITION_KEY"),
    ("CL", "CLASSIFICATION"),
    ("CM", "BET_CALL_FEATURE_DISABLED_COMMENT"),
    ("CN", "CHANNEL_COLUMN_NUMBER"),
    ("CO", "COLUMN"),
    ("CP", "CLOSE_BETS_PRESENTATION_PULL_DISABLED_CURRENT_PROGRESS_CURRENT_PERIOD"),
    ("CR", "CLASS_ORDER_CLOSE_BET_RETURNS"),
    ("CS", "CLASSIFICATIONS"),
    ("CT", "COMPETITION_NAME"),
    ("CU", "CURRENT_INFO"),
    ("D1", "DATA_1"),
    ("D2", "DATA_2"),
    ("D3", "DATA_3"),
    ("D4", "DATA_4"),
    ("D5", "DATA_5"),
    ("DA", "DIARY_DAY"),
    ("DC", "DISPLAY_CLOCK"),
    ("DD", "DISPLAY_DATE"),
    ("DE", "DESCRIPTION"),
    ("DM", "IN_PLAY_LAUNCHER_DISPLAY_MODE"),
    ("DN", "DIARY_NAME_DRAW_NUMBER"),
    ("DO", "DEFAULT_OPEN"),
    ("DP", "DECIMAL_PLACES"),
    ("DR", "DIARY_REFRESH"),
    ("DS", "DISPLAY_SCORE"),
    ("DX", "DISABLE_COLUMN_DISTRIBUTION"),
    ("DY", "DIARY"),
    ("EA", "EVENT_TIME"),
    ("EC", "ERROR_CODE_EXCLUDED_COUNTRY_CODES"),
    ("ED", "EXTRA_DATA_2_TEAM_ODDS_A"),
    ("EE", "ETOTE_LINK_DATA"),
    ("EI", "EVENT_ID"),
    ("EL", "EXTRA_STATS_AVAILABLE"),
    ("EM", "EMPTY"),
    ("EP", "EXTRA_PARTICIPANTS"),
    ("ER", "ERROR_LOGGING"),
    ("ES", "EMBEDDED_STREAMING_EXTRA_SCORES"),
    ("ET", "END_TIME_EVENT_TYPE"),
    ("EV", "EVENT"),
    ("EW", "EACH_WAY"),
    ("EX", "EXTRA_DATA_1_TEAM_ODDS_H"),
    ("FD", "FORCE_DISPLAY"),
    ("FF", "FILTERING"),
    ("FI", "FIXTURE_PARENT_ID"),
    ("FK", "FINANCIALS_FEED_1"),
    ("FL", "FINANCIALS_PERIOD_1_APN_FLUC"),
    ("FM", "FINANCIALS_MARKET_1A"),
    ("FN", "FINANCIALS_MARKET_1B"),
    ("FO", "FINANCIALS_FEED_2_FORM_PULL"),
    ("FP", "FINANCIALS_PERIOD_2_FIXED_PLACE"),
    ("FQ", "FINANCIALS_MARKET_2A"),
    ("FR", "FINANCIALS_MARKET_2B"),
    ("FS", "FIXTURE_STARTED"),
    ("FW", "FIXED_WIN"),
    ("GC", "LOTTO_GAME_CODE"),
    ("GM", "LOTTO_GAME_MARKET"),
    ("GR", "GROUP"),
    ("HA", "HANDICAP"),
    ("HD", "HANDICAP_FORMATTED"),
    ("HI", "HEADER_IMAGE_BET_HISTORY"),
    ("HM", "MARKET_BAR"),
    ("HO", "DEFAULT_OPEN_HOMEPAGE"),
    ("HP", "SHOW_ON_HOMEPAGE"),
    ("HS", "HASH"),
    ("HT", "POD_HEADER_TEXT"),
    ("HU", "INFO_BANNER_SUBHEAD2"),
    ("HV", "POD_BODY_TEXT_2"),
    ("HW", "HORSE_WEIGHT"),
    ("HY", "HORSE_AGE"),
    ("I2", "ID2"),
    ("IA", "AUDIO_ICON_DIARY_AUDIO_AVAILABLE"),
    ("IB", "IBOX"),
    ("IC", "ICON"),
    ("ID", "ID"),
    ("IF", "IN_PLAY"),
    ("IG", "IMAGE_ID"),
    ("IM", "IMAGE_INCLUDE_OVERVIEW_MARKET"),
    ("IN", "INFO_INFO_POD_IMAGE_URL"),
    ("IO", "ITEM_ORDER"),
    ("IP", "IN_PLAY_AVAILABLE_FLAG_PARENT_ID"),
    ("IQ", "INFO_POD_IMAGE1"),
    ("IR", "INRUNNING_INFO"),
    ("IS", "INFO_POD_IMAGE_PATH1"),
    ("IT", "TOPIC_ID"),
    ("IU", "INFO_POD_IMAGE2"),
    ("JN", "JOCKEY_PULL"),
    ("JY", "JOCKEY"),
    ("KC", "KIT_COLORS"),
    ("KI", "KIT_ID"),
    ("L1", "BREADCRUMB_LEVEL_1"),
    ("LA", "LABEL_INFO_POD_LINK_1_ID"),
    ("LB", "INFO_POD_LINK_1_DISPLAY_TEXT"),
    ("LC", "EVENT_COUNT_INFO_POD_LINK_1_C1_ID"),
    ("LD", "INFO_POD_LINK_1_C1_ID_TABLE"),
    ("LE", "INFO_POD_LINK_1_C2_ID"),
    ("LF", "INFO_POD_LINK_1_C2_ID_TABLE"),
    ("LG", "INFO_POD_LINK_2_ID_SOCCER_LEAGUE"),
    ("LH", "INFO_POD_LINK_2_DISPLAY_TEXT"),
    ("LI", "INFO_POD_LINK_2_C1_ID"),
    ("LJ", "INFO_POD_LINK_2_C1_ID_TABLE"),
    ("LK", "INFO_POD_LINK_2_C2_ID"),
    ("LL", "INFO_POD_LINK_2_C2_ID_TABLE"),
    ("LM", "POD_ENCODED_URL_1_LIVE_MARKETS"),
    ("LN", "POD_ENCODED_URL_2"),
    ("LO", "DEFAULT_OPEN_LEFT"),
    ("LP", "LIVE_IN_PLAY_INFO_POD_LINK_1_C3_ID"),
    ("LQ", "INFO_POD_LINK_1_C3_ID_TABLE"),
    ("LR", "INFO_POD_LINK_1_C3_SECTION_ID_LAST_RACES"),
    ("LS", "PREVIOUS_SET_SCORE_SELECTED"),
    ("MA", "MARKET"),
    ("MB", "BET_CALL_V2_DISABLED_MAX_BET"),
    ("MC", "CUSTOMER_TO_CUSTOMER_CALLING_FEATURE_DISABLED_COMMENT_V4_MARKET_COUNT"),
    ("MD", "MATCHLIVE_PERIOD"),
    ("ME", "MULTI_EVENT"),
    ("MF", "MATCH_FLAG"),
    ("MG", "MARKET_GROUP"),
    ("ML", "MATCH_LENGTH"),
    ("MM", "MERGE_MARKET"),
    ("MO", "SECONDARY_UK_EVENT"),
    ("MP", "MATCH_POSTPONED"),
    ("MR", "CUSTOMER_TO_REPRESENTATIVE_CALLING_FEATURE_DISABLED_MORE_MARKETS"),
    ("MS", "MEDIA_ID"),
    ("MT", "BET_CALL_V2_TWILIO_DISABLED_MARKET_TYPE"),
    ("MU", "MULTILINE"),
    ("MW", "LOTTO_MAX_WINNINGS"),
    ("MY", "MARKET_STYLE"),
    ("N2", "NAME2"),
    ("NA", "NAME"),
    ("NC", "CLOTH_NUMBER"),
    ("NG", "NGENERA"),
    ("NH", "NEXT_HEADER"),
    ("NM", "NON_MATCH_BASED"),
    ("NR", "NON_RUNNER"),
    ("NT", "NEUTRAL_VENUE_TEXT"),
    ("NV", "NEUTRAL_VENUE"),
    ("OB", "BANKER_OPTION_OPEN_BETS_ENABLED"),
    ("OD", "ODDS"),
    ("OH", "ODDS_HISTORY"),
    ("OO", "ODDS_OVERRIDE"),
    ("OP", "OPEN_BETS_PRESENTATION_PULL_DISABLED_OPEN_BETS"),
    ("OR", "ORDER"),
    ("OT", "OTHERS_AVAILABLE"),
    ("PA", "PARTICIPANT"),
    ("PB", "PUSH_BALANCE_ENABLED"),
    ("PC", "PAGE_DATA_1_PARTICIPANT_COUNT_PARTIAL_CASHOUT_AVAILABLE"),
    ("PD", "PAGE_DATA_POD_INFO_POD_TYPE_PULL_DELAY"),
    ("PE", "PARTICIPANTS_EXCEEDED_PERIOD"),
    ("PF", "PUSH_FLAG"),
    ("PG", "PENALTY_GOALS_MATCHLIVE_ADDITIONAL_INFO_PAGE_TYPE"),
    ("PH", "PHONE_ONLY"),
    ("PI", "PLAYING_INDICATOR_AUS_TOTE_COMBINATION"),
    ("PN", "CLOTH_NUMBER_PULL"),
    ("PO", "POD_STACK_ORDER_POINTS"),
    ("PP", "POD_OPEN"),
    ("PR", "PREFERENCE_ID_MARKET_GROUP_USER_PREFERENCE"),
    ("PS", "POD_STACK_PARTICIPANT_STATUS"),
    ("PT", "PRODUCT_TYPE_POD_TYPE"),
    ("PV", "PREMIUM_VERSION"),
    ("PX", "NO_OFFER"),
    ("PY", "PARTICIPANT_STYLE"),
    ("RA", "RANGE"),
    ("RC", "RESULT_CODE"),
    ("RD", "RACE_DETAILS"),
    ("RE", "BET_RETURNS"),
    ("RG", "REGION"),
    ("RI", "R4_COMMENT"),
    ("RO", "DEFAULT_OPEN_RIGHT_RACE_OFF"),
    ("RS", "RUNNER_STATUS_REGULAR_SINGLE"),
    ("RT", "RESULTS_TEXT"),
    ("S1", "MATCHLIVE_STATS_1"),
    ("S2", "MATCHLIVE_STATS_2"),
    ("S3", "MATCHLIVE_STATS_3"),
    ("S4", "MATCHLIVE_STATS_4"),
    ("S5", "MATCHLIVE_STATS_5"),
    ("S6", "MATCHLIVE_STATS_6"),
    ("S7", "MATCHLIVE_STATS_7"),
    ("S8", "MATCHLIVE_STATS_8"),
    ("SA", "CHANGE_STAMP_SUSPEND_ARRAY"),
    ("SB", "SCOREBOARD_TYPE"),
    ("SC", "SCORE_SCORES_COLUMN"),
    ("SD", "AUDIO_ID"),
    ("SE", "SECONDARY_EVENT"),
    ("SF", "SPOTLIGHT_FORM"),
    ("SG", "STAT_GROUP"),
    ("SI", "IMAGE_ID_PULL_SECTION_ID"),
    ("SL", "SCORES_CELL"),
    ("SM", "START_TIME"),
    ("SN", "DRAW_NUMBER_PULL"),
    ("SP", "STAT_PERIOD"),
    ("SS", "SHORT_SCORE_SUSPENDED_SELECTION"),
    ("ST", "INFO_POD_DETAIL_1_STAT_POD_BODY_TEXT_1_STAKE"),
    ("SU", "SUCCESS_SUSPENDED"),
    ("SV", "MATCHLIVE_AVAILABLE"),
    ("SY", "STYLE"),
    ("SZ", "STAT_LOCATION"),
    ("T1", "C1_TABLE_MINI_DIARY_T1_TEXT_1"),
    ("T2", "C2_TABLE_MINI_DIARY_T2_TEXT_2"),
    ("T3", "MINI_DIARY_T3_TEXT_3"),
    ("T4", "TEXT_4"),
    ("T5", "TEXT_5"),
    ("TA", "TIME_ADDED"),
    ("TB", "BREADCRUMB_TRAIL"),
    ("TC", "BET_TOTE_TYPE_TEAM_COLOR"),
    ("TD", "COUNTDOWN_TAX_DETAILS"),
    ("TE", "TEAM"),
    ("TG", "TEAM_GROUP"),
    ("TI", "TMR_SERVER"),
    ("TL", "LEAGUE_TOPIC_TOPIC_LIST"),
    ("TM", "STAT_TIME_TMR_MINS"),
    ("TN", "TRAINER_NAME"),
    ("TO", "EMPTY_TOPIC_ID_PHONE_ONLY_LIST"),
    ("TP", "TIME_STAMP"),
    ("TR", "TAX_RATE_TOPIC_REFERENCE"),
    ("TS", "TMR_SECS_TOTE_NAMES"),
    ("TT", "TMR_TICKING"),
    ("TU", "TMR_UPDATED"),
    ("TX", "TAX_METHOD_TOPIC_LIST_EXCLUSIONS"),
    ("UC", "CURRENT_INFO_V4"),
    ("UF", "UPDATE_FREQUENCY"),
    ("VA", "VALUE"),
    ("VC", "MATCHLIVE_ANIMATION"),
    ("VD", "VIRTUAL_DATA"),
    ("VI", "VIDEO_AVAILABLE"),
    ("VL", "VISIBLE"),
    ("VR", "VIRTUAL_RACE"),
    ("VS", "VIDEO_STREAM"),
    ("WG", "WIZE_GUY"),
    ("WM", "WINNING_MARGIN"),
    ("XB", "CHECK_BOX"),
    ("XC", "EXCLUDE_COLUMN_NUMBERS"),
    ("XI", "EXTRA_INFO_NODE_TEAM_MATCHTOTAL_QUOTE"),
    ("XL", "CONTROLLER"),
    ("XP", "SHORT_POINTS"),
    ("XT", "EXTRA_TIME_LENGTH"),
    ("XY", "MATCHLIVE_COORDINATES"),
    ("ZA", "TIMEZONE_ADJUSTMENT"),
    ("_V", "PADDOCK_VIDEO_AVAILABLE"),
];

/// Name for a field code, e.g. `describe("NA") == Some("NAME")`.
pub fn describe(code: &str) -> Option<&'static str> {
    MNEMONICS
        .binary_search_by(|(c, _)| (*c).cmp(code))
        .ok()
        .map(|index| MNEMONICS[index].1)
}

/// Field code for a name, case-insensitive: `code_for("odds") == Some("OD")`.
pub fn code_for(name: &str) -> Option<&'static str> {
    MNEMONICS
        .iter()
        .find(|(_, n)| n.eq_ignore_ascii_case(name))
        .map(|(code, _)| *code)
}
