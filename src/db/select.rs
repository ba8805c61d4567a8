//! Random content selection. Each mode maps to a fixed pair of prepared
//! statement templates (count + fetch); only era patterns and offsets are
//! ever bound as parameters. A miss on a sparse poem id is tolerated by a
//! small bounded retry rather than re-indexing the table.

use rand::Rng;
use rusqlite::{params, Connection, Row};

use crate::models::{Content, Mode};

/// How many random offsets we probe before declaring the category empty.
/// Gaps in the poetry id space make individual probes fallible.
const MAX_DRAWS: i64 = 3;

/// Glyph joining the two halves of a couplet, second line printed first per
/// right-to-left reading convention.
pub const COUPLET_SEPARATOR: &str = "   ۞   ";

/// Fixed category label shown for prophetic hadith.
const HADITH_SUB: &str = "حديث نبوي";
/// Default category label for everything else in the quotes table.
const WISDOM_SUB: &str = "Wisdom";

/// Statement templates plus the bound values they need. The SQL text is
/// chosen from this fixed set, never assembled from user input.
struct QueryPlan {
    count_sql: &'static str,
    data_sql: &'static str,
    /// Wildcard-wrapped era pattern, present only for filtered poem lookups.
    era_pattern: Option<String>,
    /// The unfiltered poem path addresses rows by 1-based id instead of a
    /// dense offset, because the count there is `MAX(id)` and may have gaps.
    probe_by_id: bool,
}

fn plan(mode: Mode, era: Option<&str>) -> QueryPlan {
    match (mode, era) {
        (Mode::Poems, Some(era)) => QueryPlan {
            count_sql: "SELECT COUNT(*) FROM poetry WHERE poet_era LIKE ?1",
            data_sql: "SELECT poem_text, poet_name, poet_era FROM poetry \
                       WHERE poet_era LIKE ?1 LIMIT 1 OFFSET ?2",
            era_pattern: Some(format!("%{era}%")),
            probe_by_id: false,
        },
        (Mode::Poems, None) => QueryPlan {
            count_sql: "SELECT MAX(id) FROM poetry",
            data_sql: "SELECT poem_text, poet_name, poet_era FROM poetry WHERE id = ?1",
            era_pattern: None,
            probe_by_id: true,
        },
        (Mode::Quotes, _) => QueryPlan {
            count_sql: "SELECT COUNT(*) FROM quotes WHERE category != 'hadith'",
            data_sql: "SELECT text, author, category FROM quotes \
                       WHERE category != 'hadith' LIMIT 1 OFFSET ?1",
            era_pattern: None,
            probe_by_id: false,
        },
        (Mode::Hadith, _) => QueryPlan {
            count_sql: "SELECT COUNT(*) FROM quotes WHERE category = 'hadith'",
            data_sql: "SELECT text, author, category FROM quotes \
                       WHERE category = 'hadith' LIMIT 1 OFFSET ?1",
            era_pattern: None,
            probe_by_id: false,
        },
    }
}

/// Select one random piece of content for `mode`, or `None` when the
/// category is empty (or every probe misses a gap in the id space). A failed
/// count query also reads as "nothing there" rather than an error; the only
/// fatal paths in this program are the bootstrap ones.
pub fn pick(
    conn: &Connection,
    mode: Mode,
    era: Option<&str>,
    rng: &mut impl Rng,
) -> Option<Content> {
    let plan = plan(mode, era);

    // MAX(id) over an empty table is NULL, so scan an optional and treat
    // NULL the same as zero.
    let count: i64 = match &plan.era_pattern {
        Some(pattern) => conn.query_row(plan.count_sql, params![pattern], optional_count),
        None => conn.query_row(plan.count_sql, [], optional_count),
    }
    .ok()
    .flatten()?;
    if count <= 0 {
        return None;
    }

    for _ in 0..MAX_DRAWS {
        let offset = rng.random_range(0..count);
        let fetched = match &plan.era_pattern {
            Some(pattern) => conn.query_row(plan.data_sql, params![pattern, offset], row_columns),
            None if plan.probe_by_id => {
                // Ids start at 1; the drawn offset is a 0-based sample.
                conn.query_row(plan.data_sql, params![offset + 1], row_columns)
            }
            None => conn.query_row(plan.data_sql, params![offset], row_columns),
        };
        if let Ok((text, author, category)) = fetched {
            return Some(into_content(mode, text, author, category, rng));
        }
    }
    None
}

/// [`pick`] plus the front-door fallback chain: when the mode came from the
/// unflagged random draw and the first attempt comes up empty, retry quotes
/// and then poems. Hadith is deliberately absent from the chain, matching
/// long-standing behavior.
pub fn pick_with_fallback(
    conn: &Connection,
    mode: Mode,
    era: Option<&str>,
    randomly_chosen: bool,
    rng: &mut impl Rng,
) -> Option<Content> {
    let content = pick(conn, mode, era, rng);
    if content.is_some() || !randomly_chosen {
        return content;
    }
    pick(conn, Mode::Quotes, None, rng).or_else(|| pick(conn, Mode::Poems, None, rng))
}

fn optional_count(row: &Row<'_>) -> rusqlite::Result<Option<i64>> {
    row.get(0)
}

fn row_columns(row: &Row<'_>) -> rusqlite::Result<(String, String, String)> {
    Ok((row.get(0)?, row.get(1)?, row.get(2)?))
}

/// Turn a raw row into display-ready content. Poems get the couplet
/// treatment; quote rows get their category label normalized and, for
/// hadith, the compiler name translated.
fn into_content(
    mode: Mode,
    text: String,
    author: String,
    category: String,
    rng: &mut impl Rng,
) -> Content {
    match mode {
        Mode::Poems => Content {
            text: couplet(&text, rng),
            author,
            // The third poetry column is the era, shown as-is.
            sub: category,
        },
        Mode::Quotes | Mode::Hadith => {
            if category == "hadith" {
                Content {
                    text,
                    author: translate_author(&author),
                    sub: HADITH_SUB.to_string(),
                }
            } else {
                Content {
                    text,
                    author,
                    sub: WISDOM_SUB.to_string(),
                }
            }
        }
    }
}

/// Reduce a multi-line poem to a single random couplet. Blank and near-empty
/// lines are dropped first; with an odd number of clean lines the final line
/// can never start a pair, so the usable range is clamped down to even. The
/// second line of the chosen pair is printed first.
pub fn couplet(raw: &str, rng: &mut impl Rng) -> String {
    let clean: Vec<&str> = raw
        .lines()
        .map(str::trim)
        .filter(|line| line.len() > 2)
        .collect();

    match clean.len() {
        0 => raw.to_string(),
        1 => clean[0].to_string(),
        2 => format!("{}{COUPLET_SEPARATOR}{}", clean[1], clean[0]),
        len => {
            let usable = if len % 2 == 0 { len } else { len - 1 };
            let idx = rng.random_range(0..usable / 2) * 2;
            format!("{}{COUPLET_SEPARATOR}{}", clean[idx + 1], clean[idx])
        }
    }
}

/// Map known Latin transliterations of hadith compilers to their canonical
/// Arabic names. The key is trimmed before lookup; anything unrecognized
/// passes through untouched.
pub fn translate_author(name: &str) -> String {
    let canonical = match name.trim() {
        "Bukhari" => "الإمام البخاري",
        "Muslim" => "الإمام مسلم",
        "Tirmidhi" => "الترمذي",
        "Abu Dawood" | "Abudawood" => "أبو داود",
        "Ibn Majah" | "Ibnmajah" => "ابن ماجه",
        "Nasai" => "النسائي",
        "Malik" => "الإمام مالك",
        "Ahmed" => "الإمام أحمد",
        _ => return name.to_string(),
    };
    canonical.to_string()
}
