use csv::StringRecord;
use log::debug;
use crate::coverage::ZipCounties;
use crate::territory::model::ZipCode;

const STATE_FIPS: &str = "39";
const STATE_ABBR: &str = "OH";

/// positions of the columns we read, looked up by header name
#[derive(Debug, Default)]
struct Columns {
    state_fips: Option<usize>,
    state: Option<usize>,
    zipcode: Option<usize>,
    county: Option<usize>,
}

impl Columns {
    fn from_headers(headers: &StringRecord) -> Self {
        let find = |name: &str| headers.iter().position(|h| h.trim() == name);
        Self {
            state_fips: find("state_fips"),
            state: find("state"),
            zipcode: find("zipcode"),
            county: find("county"),
        }
    }
}

/// one row of the state/county/zip CSV, extra columns are ignored
#[derive(Debug)]
pub struct CrosswalkRow {
    pub state_fips: String,
    pub state: String,
    pub zipcode: String,
    pub county: String,
}

impl CrosswalkRow {
    /// missing columns, and short rows, read as empty strings
    fn from_record(columns: &Columns, record: &StringRecord) -> Self {
        let field = |idx: Option<usize>| idx
            .and_then(|idx| record.get(idx))
            .unwrap_or("")
            .to_owned();
        Self {
            state_fips: field(columns.state_fips),
            state: field(columns.state),
            zipcode: field(columns.zipcode),
            county: field(columns.county),
        }
    }

    fn in_state(&self) -> bool {
        self.state_fips.trim() == STATE_FIPS || self.state.trim() == STATE_ABBR
    }

    /// the row as a (zip, county) pair, `None` if either is unusable
    fn into_entry(self) -> Option<(ZipCode, String)> {
        let county = self.county.trim();
        if county.is_empty() {
            return None;
        }
        let zip = self.zipcode.parse().ok()?;
        Some((zip, county.to_owned()))
    }
}

/// parse the CSV body into zip -> county for Ohio
///
/// Rows that cannot be read, belong to another state, or carry a bad zip are
/// dropped. A zip listed more than once keeps its last county.
pub fn parse_crosswalk(body: &str) -> ZipCounties {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(body.as_bytes());

    let columns = match reader.headers() {
        Ok(headers) => Columns::from_headers(headers),
        Err(e) => {
            debug!("cannot read crosswalk headers: {}", e);
            return ZipCounties::new();
        }
    };

    let mut skipped = 0usize;
    let mut zip_counties = ZipCounties::new();
    for record in reader.records() {
        let record = match record {
            Ok(record) => record,
            Err(_) => {
                skipped += 1;
                continue;
            }
        };
        let row = CrosswalkRow::from_record(&columns, &record);
        if !row.in_state() {
            continue;
        }
        match row.into_entry() {
            Some((zip, county)) => {
                zip_counties.insert(zip, county);
            }
            None => skipped += 1,
        }
    }
    if skipped > 0 {
        debug!("skipped [{}] malformed rows", skipped);
    }
    zip_counties
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
state_fips,state,state_abbr,zipcode,county,city
39,Ohio,OH,44101,Cuyahoga,Cleveland
39,Ohio,OH,45300,Montgomery County,Dayton
36,New York,NY,10001,New York,New York
39,Ohio,OH,4410,Cuyahoga,Broken
39,Ohio,OH,44a02,Cuyahoga,Broken
39,Ohio,OH,44103,,Nowhere
,OH,OH,43215,Franklin,Columbus
39,Ohio,OH,45202,Hamilton
";

    fn zip(s: &str) -> ZipCode {
        s.parse().unwrap()
    }

    #[test]
    fn keeps_only_valid_ohio_rows() {
        let parsed = parse_crosswalk(SAMPLE);
        let keys = parsed.keys().map(ZipCode::as_str).collect::<Vec<_>>();
        assert_eq!(keys, vec!["43215", "44101", "45202", "45300"]);
        assert_eq!(parsed[&zip("45300")], "Montgomery County");
        assert_eq!(parsed[&zip("45202")], "Hamilton");
    }

    #[test]
    fn last_row_wins_for_duplicate_zips() {
        let body = "state_fips,zipcode,county\n39,45001,Hamilton\n39,45001,Butler\n";
        let parsed = parse_crosswalk(body);
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[&zip("45001")], "Butler");
    }

    #[test]
    fn short_rows_keep_their_leading_columns() {
        let body = "state_fips,state,state_abbr,zipcode,county,city\n39,Ohio,OH,45202,Hamilton\n39,Ohio,OH,45203\n";
        let parsed = parse_crosswalk(body);
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[&zip("45202")], "Hamilton");
    }

    #[test]
    fn missing_columns_read_as_empty() {
        // no state_fips column, state abbreviation still matches
        let body = "state,zipcode,county\nOH,43215,Franklin\nNY,10001,New York\n";
        let parsed = parse_crosswalk(body);
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[&zip("43215")], "Franklin");
    }

    #[test]
    fn garbage_body_yields_nothing() {
        assert!(parse_crosswalk("").is_empty());
        assert!(parse_crosswalk("<html>404: Not Found</html>").is_empty());
    }
}
