//! Row cleaning and categorical encoding, recorded for replay

use crate::normalization::{Normalizer, NormalizerConfig};
use hypotest_core::{sample, Error, Level, Result};
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Ordinal code of a missing value
pub const MISSING_CODE: i64 = -2;
/// Ordinal code of a level not seen when the encoding was learned
pub const UNKNOWN_CODE: i64 = -1;

/// How categorical columns are turned into numbers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Encoding {
    /// One 0/1 column `<name>_<level>` per level, in place of the original
    #[default]
    OneHot,
    /// Levels replaced by their 1-based position in sorted order
    Ordinal,
}

/// A recorded preprocessing step
#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    CleanData,
    /// Encoding with the levels learned per column
    CategEncoding {
        encoding: Encoding,
        categories: Vec<(String, Vec<Level>)>,
    },
}

/// Data preparation pipeline
///
/// Each operation called with `append = true` is recorded, so that
/// [`apply_all`](Self::apply_all) can replay the same preparation on new
/// data (for instance a test set) followed by the normalizer.
#[derive(Debug, Clone, Default)]
pub struct Preprocessing {
    steps: Vec<Step>,
    normalizer: Option<Normalizer>,
}

impl Preprocessing {
    pub fn new(normalizer: Option<NormalizerConfig>) -> Self {
        Self {
            steps: Vec::new(),
            normalizer: normalizer.map(Normalizer::new),
        }
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn normalizer(&self) -> Option<&Normalizer> {
        self.normalizer.as_ref()
    }

    pub fn normalizer_mut(&mut self) -> Option<&mut Normalizer> {
        self.normalizer.as_mut()
    }

    /// Drop every row holding a null
    pub fn clean_data(&mut self, frame: &DataFrame, append: bool) -> Result<DataFrame> {
        info!("Cleaning data");
        if append {
            self.steps.push(Step::CleanData);
        }
        drop_missing(frame)
    }

    /// Encode categorical columns
    ///
    /// `columns = None` encodes every non-numeric column. Levels are learned
    /// from `frame` and reused when the step is replayed: one-hot keeps the
    /// learned dummy columns, ordinal codes unseen levels as [`UNKNOWN_CODE`].
    pub fn categ_encoding(
        &mut self,
        frame: &DataFrame,
        append: bool,
        encoding: Encoding,
        columns: Option<&[&str]>,
    ) -> Result<DataFrame> {
        info!("Category encoding");
        let categories = learn_categories(frame, encoding, columns)?;
        let encoded = encode(frame, encoding, &categories)?;
        if append {
            self.steps.push(Step::CategEncoding {
                encoding,
                categories,
            });
        }
        Ok(encoded)
    }

    /// Fit the normalizer on `frame` and scale it; unchanged without one
    pub fn normalize(&mut self, frame: &DataFrame) -> Result<DataFrame> {
        match self.normalizer.as_mut() {
            Some(normalizer) => normalizer.fit_transform(frame),
            None => Ok(frame.clone()),
        }
    }

    /// Replay the recorded steps, then the fitted normalizer
    pub fn apply_all(&self, frame: &DataFrame) -> Result<DataFrame> {
        let mut out = frame.clone();
        for step in &self.steps {
            debug!("replaying {:?}", step);
            out = match step {
                Step::CleanData => drop_missing(&out)?,
                Step::CategEncoding {
                    encoding,
                    categories,
                } => encode(&out, *encoding, categories)?,
            };
        }
        match &self.normalizer {
            Some(normalizer) => normalizer.transform(&out),
            None => Ok(out),
        }
    }
}

fn drop_missing(frame: &DataFrame) -> Result<DataFrame> {
    let cleaned = frame.drop_nulls::<String>(None)?;
    info!("Dropped {} of {} rows", frame.height() - cleaned.height(), frame.height());
    Ok(cleaned)
}

fn as_text(column: &Column) -> Result<Series> {
    Ok(column.as_materialized_series().cast(&DataType::String)?)
}

/// Levels per column; one-hot levels are the text form used in dummy names
fn learn_categories(
    frame: &DataFrame,
    encoding: Encoding,
    columns: Option<&[&str]>,
) -> Result<Vec<(String, Vec<Level>)>> {
    let names: Vec<&str> = match columns {
        Some(names) => names.to_vec(),
        None => frame
            .get_columns()
            .iter()
            .filter(|column| !sample::is_numeric(column.as_materialized_series()))
            .map(|column| column.name().as_str())
            .collect(),
    };
    names
        .into_iter()
        .map(|name| -> Result<(String, Vec<Level>)> {
            let series = sample::column(frame, name)?;
            let levels = match encoding {
                Encoding::OneHot => sample::distinct_levels(&series.cast(&DataType::String)?)?,
                Encoding::Ordinal => sample::distinct_levels(series)?,
            };
            Ok((name.to_string(), levels))
        })
        .collect()
}

fn encode(
    frame: &DataFrame,
    encoding: Encoding,
    categories: &[(String, Vec<Level>)],
) -> Result<DataFrame> {
    if let Some((name, _)) = categories.iter().find(|(name, _)| frame.column(name).is_err()) {
        return Err(Error::InvalidColumn(format!("cannot encode missing column `{name}`")));
    }

    let mut out: Vec<Column> = Vec::with_capacity(frame.width());
    for column in frame.get_columns() {
        let name = column.name().as_str();
        let Some((_, levels)) = categories.iter().find(|(n, _)| n == name) else {
            out.push(column.clone());
            continue;
        };
        match encoding {
            Encoding::OneHot => {
                let dummies = as_text(column)?.to_dummies(Some("_"), false, true)?;
                // learned levels only: unseen ones are dropped, absent ones are all zero
                for level in levels {
                    let dummy = format!("{name}_{level}");
                    out.push(match dummies.column(&dummy) {
                        Ok(values) => values.cast(&DataType::Int64)?,
                        Err(_) => Column::new(dummy.into(), vec![0i64; frame.height()]),
                    });
                }
            }
            Encoding::Ordinal => {
                let codes: Vec<i64> = sample::levels(column.as_materialized_series())?
                    .into_iter()
                    .map(|level| match level {
                        None => MISSING_CODE,
                        Some(level) => levels
                            .binary_search(&level)
                            .map_or(UNKNOWN_CODE, |pos| pos as i64 + 1),
                    })
                    .collect();
                out.push(Column::new(name.into(), codes));
            }
        }
    }
    Ok(DataFrame::new(out)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame() -> DataFrame {
        df![
            "Survived" => [0i64, 1, 1, 0],
            "Sex" => [Some("male"), Some("female"), None, Some("male")],
            "Age" => [Some(22.0), None, Some(26.0), Some(35.0)],
        ]
        .unwrap()
    }

    fn ints(frame: &DataFrame, name: &str) -> Vec<Option<i64>> {
        frame.column(name).unwrap().i64().unwrap().to_vec()
    }

    #[test]
    fn test_clean_data_drops_incomplete_rows() {
        let mut pipeline = Preprocessing::new(None);
        let cleaned = pipeline.clean_data(&frame(), true).unwrap();
        assert_eq!(cleaned.height(), 2);
        assert_eq!(ints(&cleaned, "Survived"), vec![Some(0), Some(0)]);
        assert_eq!(pipeline.steps(), &[Step::CleanData]);
    }

    #[test]
    fn test_append_false_is_not_recorded() {
        let mut pipeline = Preprocessing::new(None);
        pipeline.clean_data(&frame(), false).unwrap();
        pipeline
            .categ_encoding(&frame(), false, Encoding::OneHot, None)
            .unwrap();
        assert!(pipeline.steps().is_empty());
    }

    #[test]
    fn test_one_hot_encoding() {
        let mut pipeline = Preprocessing::new(None);
        let encoded = pipeline
            .categ_encoding(&frame(), true, Encoding::OneHot, None)
            .unwrap();
        assert_eq!(
            encoded.get_column_names_str(),
            vec!["Survived", "Sex_female", "Sex_male", "Age"]
        );
        assert_eq!(ints(&encoded, "Sex_female"), [0, 1, 0, 0].map(Some).to_vec());
        assert_eq!(ints(&encoded, "Sex_male"), [1, 0, 0, 1].map(Some).to_vec());
    }

    #[test]
    fn test_one_hot_replay_keeps_learned_columns() {
        let mut pipeline = Preprocessing::new(None);
        let train = df!["Port" => ["C", "S", "S"]].unwrap();
        pipeline
            .categ_encoding(&train, true, Encoding::OneHot, None)
            .unwrap();

        // "Q" was never seen and "C" is absent from the new data
        let test = df!["Port" => ["S", "Q"]].unwrap();
        let replayed = pipeline.apply_all(&test).unwrap();
        assert_eq!(replayed.get_column_names_str(), vec!["Port_C", "Port_S"]);
        assert_eq!(ints(&replayed, "Port_C"), vec![Some(0), Some(0)]);
        assert_eq!(ints(&replayed, "Port_S"), vec![Some(1), Some(0)]);
    }

    #[test]
    fn test_ordinal_encoding_of_selected_columns() {
        let mut pipeline = Preprocessing::new(None);
        let encoded = pipeline
            .categ_encoding(&frame(), true, Encoding::Ordinal, Some(&["Sex"]))
            .unwrap();
        assert_eq!(
            ints(&encoded, "Sex"),
            [2, 1, MISSING_CODE, 2].map(Some).to_vec()
        );
        assert!(matches!(
            pipeline.categ_encoding(&frame(), true, Encoding::Ordinal, Some(&["Cabin"])),
            Err(Error::InvalidColumn(_))
        ));
    }

    #[test]
    fn test_apply_all_reuses_learned_levels() {
        let mut pipeline = Preprocessing::new(None);
        let cleaned = pipeline.clean_data(&frame(), true).unwrap();
        pipeline
            .categ_encoding(&cleaned, true, Encoding::Ordinal, None)
            .unwrap();

        // only "male" survived cleaning, so "female" is unknown on replay
        let replayed = pipeline.apply_all(&frame()).unwrap();
        assert_eq!(replayed.height(), 2);
        assert_eq!(ints(&replayed, "Sex"), vec![Some(1), Some(1)]);

        let other = df![
            "Survived" => [1i64],
            "Sex" => ["female"],
            "Age" => [30.0],
        ]
        .unwrap();
        let replayed = pipeline.apply_all(&other).unwrap();
        assert_eq!(ints(&replayed, "Sex"), vec![Some(UNKNOWN_CODE)]);
    }

    #[test]
    fn test_apply_all_requires_fitted_normalizer() {
        let config = NormalizerConfig::new().with_zscore(["Age"]);
        let mut pipeline = Preprocessing::new(Some(config));
        let cleaned = pipeline.clean_data(&frame(), true).unwrap();
        assert!(matches!(pipeline.apply_all(&frame()), Err(Error::NotFitted(_))));

        let scaled = pipeline.normalize(&cleaned).unwrap();
        assert_eq!(pipeline.apply_all(&frame()).unwrap(), scaled);
    }
}
