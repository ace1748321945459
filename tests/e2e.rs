mod common;

use common::glyph_reader::{GlyphReader, HALF_TIME_H, HEADER_H};
use common::synthetic_image::{
    table_rows, Scoresheet, BOTTOM_TABLE_LINES, BOTTOM_TABLE_Y, COLUMN_XS, GLYPH_H, PAGE_H, PAGE_W,
    TOP_TABLE_LINES, TOP_TABLE_Y,
};
use emarque_grid::diagnostics::{MemorySink, NullSink, COLUMN_COLOR};
use emarque_grid::{PlayerRow, RosterExtractor, RosterParams};

const NAMES: [&str; 11] = [
    "Martin Léo",
    "Dupont Jean",
    "Bernard Paul",
    "Petit Luc",
    "Durand Hugo",
    "Leroy Tom",
    "Moreau Noé",
    "Simon Axel",
    "Laurent Éric",
    "Michel Yann",
    "Garcia Enzo",
];

const NAME_COL: usize = 1;
const STARTER_COL: usize = 2;
const PLAY_TIME_COL: usize = 3;
const POINTS_COL: usize = 4;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Foul count drawn for player `k`; zero leaves the box empty.
fn drawn_fouls(k: usize) -> u32 {
    (k % 5) as u32
}

/// The row the sheet is expected to yield for player `k`.
///
/// An empty foul box has no enclosed hole, so it reads as 4 rather than 0.
fn expected_player(k: usize) -> PlayerRow {
    let threes = (k % 3) as u32;
    let two_ext = (k % 2) as u32;
    let (two_int, ft_made) = (1, 2);
    PlayerRow {
        jersey: Some(4 + k as u8),
        name: NAMES[k].to_string(),
        starter: k < 3,
        play_time: "12:34".to_string(),
        points: 3 * threes + 2 * (two_int + two_ext) + ft_made,
        shots_made: threes + two_int + two_ext,
        threes,
        two_int,
        two_ext,
        ft_made,
        fouls_committed: match drawn_fouls(k) {
            0 => 4,
            f => f,
        },
    }
}

fn draw_player(sheet: &mut Scoresheet, row_y: usize, k: usize) {
    let p = expected_player(k);
    sheet.value(0, row_y, p.jersey.map_or(0, usize::from));
    sheet.block(NAME_COL, row_y, 4 + 2 * k, GLYPH_H);
    if p.starter {
        sheet.block(STARTER_COL, row_y, 10, GLYPH_H);
    }
    sheet.block(PLAY_TIME_COL, row_y, 24, GLYPH_H);
    let stats = [
        p.points,
        p.shots_made,
        p.threes,
        p.two_int,
        p.two_ext,
        p.ft_made,
        drawn_fouls(k),
    ];
    for (offset, v) in stats.into_iter().enumerate() {
        sheet.value(POINTS_COL + offset, row_y, v as usize);
    }
}

/// Home table: header, three players, a half-time line, three players.
/// Visiting table: header (read as a row, then rejected), five players.
fn match_sheet() -> Scoresheet {
    let mut sheet = Scoresheet::ruled();
    let top = table_rows(TOP_TABLE_Y, TOP_TABLE_LINES);
    let bottom = table_rows(BOTTOM_TABLE_Y, BOTTOM_TABLE_LINES);

    sheet.block(NAME_COL, top[0], 10, HEADER_H);
    let mut k = 0;
    for (band, &row_y) in top[1..top.len() - 1].iter().enumerate() {
        if band == 3 {
            sheet.block(NAME_COL, row_y, 10, HALF_TIME_H);
            sheet.value(POINTS_COL, row_y, 7);
            continue;
        }
        draw_player(&mut sheet, row_y, k);
        k += 1;
    }

    sheet.block(NAME_COL, bottom[0], 10, HEADER_H);
    for &row_y in &bottom[1..bottom.len() - 1] {
        draw_player(&mut sheet, row_y, k);
        k += 1;
    }
    assert_eq!(k, NAMES.len());
    sheet
}

#[test]
fn blank_page_yields_empty_rosters() {
    init_logging();
    let sheet = Scoresheet::blank();
    let reader = GlyphReader::new(&NAMES);
    let extractor = RosterExtractor::new(RosterParams::default(), &reader).unwrap();

    let report = extractor.process_with_diagnostics(sheet.view(), &NullSink);

    assert!(!report.geometry.is_found());
    assert!(report.column_map.is_empty());
    assert_eq!(report.teams[0].name, "Locaux");
    assert_eq!(report.teams[1].name, "Visiteurs");
    assert!(report.teams.iter().all(|t| t.is_empty()));
    assert_eq!(reader.calls(), 0);
}

#[test]
fn ruled_sheet_yields_both_rosters() {
    init_logging();
    let sheet = match_sheet();
    let reader = GlyphReader::new(&NAMES);
    let extractor = RosterExtractor::new(RosterParams::default(), &reader).unwrap();

    let report = extractor.process_with_diagnostics(sheet.view(), &NullSink);

    assert_eq!(report.geometry.column_bounds, COLUMN_XS.to_vec());
    let mut rows = table_rows(TOP_TABLE_Y, TOP_TABLE_LINES);
    rows.extend(table_rows(BOTTOM_TABLE_Y, BOTTOM_TABLE_LINES));
    assert_eq!(report.geometry.row_bounds, rows);
    assert_eq!(report.column_map.len(), 11);

    let [home, away] = report.teams;
    let expected_home: Vec<PlayerRow> = (0..6).map(expected_player).collect();
    let expected_away: Vec<PlayerRow> = (6..11).map(expected_player).collect();
    assert_eq!(home.players, expected_home);
    assert_eq!(away.players, expected_away);
    // The band between the two tables is read in both halves; its empty foul
    // box reads as 4, so it counts as a raw row until the filter drops it.
    assert_eq!(report.raw_rows, [7, 6]);
    assert_eq!(home.players[0].fouls_committed, 4);
    assert_eq!(away.players[4].fouls_committed, 4);

    for p in home.players.iter().chain(&away.players) {
        assert_eq!(p.shots_made, p.threes + p.two_int + p.two_ext);
        assert_eq!(p.points, 3 * p.threes + 2 * (p.two_int + p.two_ext) + p.ft_made);
    }
}

#[test]
fn debug_outputs_are_request_scoped() {
    init_logging();
    let sheet = match_sheet();
    let reader = GlyphReader::new(&NAMES);
    let params = RosterParams {
        debug: true,
        save_cells: true,
        ..RosterParams::default()
    };
    let extractor = RosterExtractor::new(params, &reader).unwrap();
    let sink = MemorySink::new();

    let report = extractor.process_with_diagnostics(sheet.view(), &sink);

    let overlay = report.overlay.as_ref().expect("overlay requested");
    assert_eq!(overlay.dimensions(), (PAGE_W as u32, PAGE_H as u32));
    assert_eq!(*overlay.get_pixel(COLUMN_XS[1] as u32, 500), COLUMN_COLOR);

    // Three accepted rows per half, eleven cells each.
    let cells = sink.into_cells();
    assert_eq!(cells.len(), 2 * 3 * 11);
    assert!(cells.iter().any(|(path, _)| path.starts_with("bottom/row2")));
    assert!(!cells.iter().any(|(path, _)| path.starts_with("top/row3")));

    for label in ["binarize", "grid", "columns", "rows_top", "rows_bottom", "filter"] {
        assert!(report.timings.stage_ms(label).is_some(), "missing stage {label}");
    }
    assert!(report.timings.total_ms >= 0.0);
}
