// src/extractors/metrics.rs

// --- Imports ---
use once_cell::sync::Lazy;
use regex::Regex;

use crate::report::{CommentRecord, RankingRecord};
use crate::utils::error::{CommentParseError, RankingParseError};

// --- Regex Patterns (Lazy Static) ---
// One quoted phrase followed by a bracketed (or parenthesized) sector label
// at the end of the line.
static COMMENT_LINE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"^\s*["'“‘]?(?P<quote>.+?)["'”’]?\s*[\[(](?P<sector>[^\])]+)[\])]\s*$"#)
        .expect("Failed to compile COMMENT_LINE_RE")
});

/// Ranks every sector in the vocabulary from the growth/contraction
/// sentences of two narrative sections.
///
/// The last line of each text holds two sentences: the first lists growing
/// sectors after a colon, separated by `;`, in order of strength; the
/// second lists contracting sectors the same way. A growing list of length
/// N yields ranks `N..1` in listed order; a contracting list of length M
/// yields `-M..-1`. Sectors mentioned in neither list stay at 0.
///
/// `overview` fills `primary_rank` and `rank_by` (the "new orders" or
/// "business activity" text) fills `secondary_rank`. A sector name outside
/// the vocabulary fails the whole ranking; a partially filled ranking would
/// silently mis-rank the rest.
pub fn rank(
    overview: &str,
    rank_by: &str,
    sectors: &[&str],
) -> Result<Vec<RankingRecord>, RankingParseError> {
    let mut records: Vec<RankingRecord> = sectors
        .iter()
        .map(|sector| RankingRecord {
            sector: sector.to_string(),
            primary_rank: 0,
            secondary_rank: 0,
        })
        .collect();

    let (growing, contracting) = direction_lists(overview)?;
    assign_ranks(&mut records, &growing, &contracting, |record, rank| {
        record.primary_rank = rank;
    })?;

    let (growing, contracting) = direction_lists(rank_by)?;
    assign_ranks(&mut records, &growing, &contracting, |record, rank| {
        record.secondary_rank = rank;
    })?;

    Ok(records)
}

/// Splits the final line of a section text into its growing and
/// contracting sector lists.
fn direction_lists(text: &str) -> Result<(Vec<String>, Vec<String>), RankingParseError> {
    let last_line = text
        .lines()
        .last()
        .ok_or_else(|| RankingParseError::Structure("text is empty".to_string()))?;
    let mut sentences = last_line.split(". ");
    let growing = sentences.next().map(sector_list).ok_or_else(|| {
        RankingParseError::Structure(format!("no growth sentence in: {}", last_line))
    })??;
    let contracting = sentences.next().map(sector_list).ok_or_else(|| {
        RankingParseError::Structure(format!("no contraction sentence in: {}", last_line))
    })??;
    Ok((growing, contracting))
}

/// Pulls the `;`-separated sector names after the sentence's colon. The
/// last item sheds the enumeration artifact "and " and the sentence period.
fn sector_list(sentence: &str) -> Result<Vec<String>, RankingParseError> {
    let (_, listing) = sentence.split_once(':').ok_or_else(|| {
        RankingParseError::Structure(format!("no colon in sentence: {}", sentence))
    })?;
    let mut items: Vec<String> = listing
        .split(';')
        .map(|item| item.trim().to_string())
        .collect();
    if let Some(last) = items.last_mut() {
        let cleaned = last.trim_end_matches('.');
        let cleaned = cleaned.strip_prefix("and ").unwrap_or(cleaned);
        *last = cleaned.trim().to_string();
    }
    Ok(items)
}

fn assign_ranks(
    records: &mut [RankingRecord],
    growing: &[String],
    contracting: &[String],
    set: impl Fn(&mut RankingRecord, i32),
) -> Result<(), RankingParseError> {
    let n = growing.len() as i32;
    for (i, sector) in growing.iter().enumerate() {
        let record = find_sector(records, sector)?;
        set(record, n - i as i32);
    }
    let m = contracting.len() as i32;
    for (i, sector) in contracting.iter().enumerate() {
        let record = find_sector(records, sector)?;
        set(record, i as i32 - m);
    }
    Ok(())
}

fn find_sector<'a>(
    records: &'a mut [RankingRecord],
    sector: &str,
) -> Result<&'a mut RankingRecord, RankingParseError> {
    records
        .iter_mut()
        .find(|record| record.sector == sector)
        .ok_or_else(|| RankingParseError::UnknownSector(sector.to_string()))
}

/// Extracts `(sector, comment)` pairs from a rendered comments block.
///
/// The first and last line are structural wrapper lines, not content. Every
/// remaining line must match the quote/sector pattern; one bad line fails
/// the whole section, since a systematic mismatch usually means the source
/// format changed and partial results would be worse than an explicit
/// failure. A sector quoted twice keeps only the later comment.
pub fn extract_comments(text: &str) -> Result<Vec<CommentRecord>, CommentParseError> {
    let lines: Vec<&str> = text.lines().collect();
    if lines.len() <= 2 {
        return Ok(Vec::new());
    }

    let mut records: Vec<CommentRecord> = Vec::new();
    for line in &lines[1..lines.len() - 1] {
        let caps = COMMENT_LINE_RE
            .captures(line)
            .ok_or_else(|| CommentParseError::Pattern(line.to_string()))?;
        let sector = caps["sector"].trim().to_string();
        let comment = caps["quote"].trim().to_string();
        match records.iter_mut().find(|record| record.sector == sector) {
            // Last write wins when a sector appears twice.
            Some(existing) => existing.comment = comment,
            None => records.push(CommentRecord { sector, comment }),
        }
    }
    Ok(records)
}
