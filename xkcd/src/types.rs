use std::fmt::{self, Display};

use xkcd_core::{wrap_text, Comic, Entry, Index, WRAP_WIDTH};

static INDEX_HEADER: &str = "Num       Date        Title
------------------------------------------------------------------------------";

/// Full report of a single comic.
#[derive(Debug, Clone, Copy)]
pub struct ComicReport<'a>(pub &'a Comic);

impl Display for ComicReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let comic = self.0;

        writeln!(f, "Comic #{} ({})", comic.num, comic.date())?;
        writeln!(f, "Title:      {}", comic.title)?;
        writeln!(f, "Safe title: {}", comic.safe_title)?;
        writeln!(f, "Link:       {}", comic.link)?;
        writeln!(f, "Image:      {}", comic.img)?;
        writeln!(f, "News:       {}", comic.news)?;
        writeln!(f)?;
        writeln!(f, "Alt text:")?;
        writeln!(f, "{}", wrap_text(&comic.alt, WRAP_WIDTH))?;
        writeln!(f)?;
        writeln!(f, "Transcript:")?;
        writeln!(f, "{}", wrap_text(&comic.transcript, WRAP_WIDTH))
    }
}

/// One line of the index listing.
#[derive(Debug, Clone, Copy)]
pub struct IndexRow<'a>(pub &'a Entry);

impl Display for IndexRow<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(comic) = self.0.comic() else {
            let num = self
                .0
                .number
                .map_or_else(|| String::from("-"), |num| num.to_string());
            return write!(f, "{num:<8}  --/--/----  <unavailable>");
        };

        write!(
            f,
            "{:<8}  {:>2}/{:0>2}/{}  {:<58}",
            comic.num, comic.month, comic.day, comic.year, comic.title
        )
    }
}

/// Fixed column listing of a whole index page, failed entries included.
#[derive(Debug, Clone, Copy)]
pub struct IndexListing<'a>(pub &'a Index);

impl Display for IndexListing<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{INDEX_HEADER}")?;
        for entry in self.0.entries() {
            writeln!(f, "{}", IndexRow(entry))?;
        }
        Ok(())
    }
}
