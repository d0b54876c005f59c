// Large & Deep DOM - deeply nested siblings and a 50x50 table
//
// Every sibling and table cell is labeled with its own coordinate ("12.3"),
// so a lookup is verified by comparing the text it resolves to against the
// coordinate that addressed it.

use crate::driver::{SharedDriver, Target};
use crate::error::{Error, Result};
use crate::pages::trimmed_text;
use rand::Rng;
use std::str::FromStr;

/// Rows of the siblings section and the table are labeled 1..=ROWS
const ROWS: u32 = 49;
const SIBLING_COLUMNS: u32 = 3;
const TABLE_COLUMNS: u32 = 49;

/// Which part of the page a random coordinate is drawn for
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SiblingScope {
    /// The nested "siblings" section: three columns per level
    #[default]
    OutsideSiblings,
    /// The large table
    Table,
}

impl SiblingScope {
    fn columns(self) -> u32 {
        match self {
            SiblingScope::OutsideSiblings => SIBLING_COLUMNS,
            SiblingScope::Table => TABLE_COLUMNS,
        }
    }
}

impl FromStr for SiblingScope {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "outsideSiblings" => Ok(SiblingScope::OutsideSiblings),
            "forTable" => Ok(SiblingScope::Table),
            other => Err(Error::InvalidScope(other.to_string())),
        }
    }
}

/// A `<row>.<column>` address on the page, both parts 1-based
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coordinate {
    pub row: u32,
    pub column: u32,
}

impl Coordinate {
    pub fn new(row: u32, column: u32) -> Self {
        Self { row, column }
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.row, self.column)
    }
}

impl FromStr for Coordinate {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || Error::InvalidCoordinate(s.to_string());
        let (row, column) = s.split_once('.').ok_or_else(invalid)?;
        Ok(Coordinate {
            row: row.parse().map_err(|_| invalid())?,
            column: column.parse().map_err(|_| invalid())?,
        })
    }
}

#[derive(Clone)]
pub struct LargeAndDeepDomPage {
    driver: SharedDriver,
}

impl LargeAndDeepDomPage {
    pub fn new(driver: SharedDriver) -> Self {
        Self { driver }
    }

    /// Picks a random coordinate that exists in `scope`.
    ///
    /// Rows are drawn from 1..=49; columns from 1..=3 for the siblings
    /// section and 1..=49 for the table.
    pub fn define_sibling_to_get(&self, scope: SiblingScope) -> Coordinate {
        self.define_sibling_with(scope, &mut rand::thread_rng())
    }

    /// Like [`define_sibling_to_get`](Self::define_sibling_to_get), drawing
    /// from `rng`.
    pub fn define_sibling_with<R: Rng + ?Sized>(&self, scope: SiblingScope, rng: &mut R) -> Coordinate {
        let coordinate = Coordinate {
            row: rng.gen_range(1..=ROWS),
            column: rng.gen_range(1..=scope.columns()),
        };
        tracing::debug!(?scope, %coordinate, "picked sibling");
        coordinate
    }

    /// Text of the sibling element at `coordinate`
    pub async fn get_sibling(&self, coordinate: Coordinate) -> Result<String> {
        let sibling = Target::css(format!(r#"[id="sibling-{coordinate}"]"#));
        trimmed_text(&self.driver, &sibling).await
    }

    /// Text of the table cell at `coordinate`
    pub async fn get_value_from_table(&self, coordinate: Coordinate) -> Result<String> {
        let cell = Target::css(format!(
            r#"[id="large-table"] [class="row-{}"] [class="column-{}"]"#,
            coordinate.row, coordinate.column
        ));
        trimmed_text(&self.driver, &cell).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RecordingDriver;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::sync::Arc;

    fn page() -> (Arc<RecordingDriver>, LargeAndDeepDomPage) {
        let driver = Arc::new(RecordingDriver::new());
        (driver.clone(), LargeAndDeepDomPage::new(driver))
    }

    #[test]
    fn test_coordinates_stay_in_range() {
        let (_, page) = page();
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..500 {
            let sibling = page.define_sibling_with(SiblingScope::OutsideSiblings, &mut rng);
            assert!((1..=49).contains(&sibling.row));
            assert!((1..=3).contains(&sibling.column));

            let cell = page.define_sibling_with(SiblingScope::Table, &mut rng);
            assert!((1..=49).contains(&cell.row));
            assert!((1..=49).contains(&cell.column));
        }
    }

    #[test]
    fn test_coordinate_parses_its_rendering() {
        let coordinate = Coordinate::new(12, 3);
        assert_eq!(coordinate.to_string(), "12.3");
        assert_eq!("12.3".parse::<Coordinate>().unwrap(), coordinate);

        for bad in ["", "12", "12.", ".3", "a.b", "1.2.3"] {
            assert!(
                matches!(bad.parse::<Coordinate>(), Err(Error::InvalidCoordinate(_))),
                "{bad:?} should not parse"
            );
        }
    }

    #[test]
    fn test_scope_parsing() {
        assert_eq!(
            "outsideSiblings".parse::<SiblingScope>().unwrap(),
            SiblingScope::OutsideSiblings
        );
        assert_eq!("forTable".parse::<SiblingScope>().unwrap(), SiblingScope::Table);
        assert!(matches!("table".parse::<SiblingScope>(), Err(Error::InvalidScope(_))));
        assert_eq!(SiblingScope::default(), SiblingScope::OutsideSiblings);
    }

    #[tokio::test]
    async fn test_lookups_use_coordinate_selectors() {
        let (driver, page) = page();
        driver.set_text(r#"[id="sibling-4.2"]"#, " 4.2 ");
        driver.set_text(
            r#"[id="large-table"] [class="row-30"] [class="column-17"]"#,
            "30.17",
        );

        assert_eq!(page.get_sibling(Coordinate::new(4, 2)).await.unwrap(), "4.2");
        assert_eq!(
            page.get_value_from_table(Coordinate::new(30, 17)).await.unwrap(),
            "30.17"
        );
    }
}
