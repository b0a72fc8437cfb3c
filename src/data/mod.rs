//! The course data set: ten fixed sample vectors.

mod fixtures;
mod export;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::{Error, Sample};

/// Column names, in the order [`CourseData::iter`] yields them.
pub mod keys {
    /// Carbohydrate share, first sample.
    pub const SAMPLE1_CARBOHYDRATE: &str = "Sample1_Data.Carbohydrate";
    /// Carbohydrate share, second sample.
    pub const SAMPLE2_CARBOHYDRATE: &str = "Sample2_Data.Carbohydrate";
    /// Sugar category, first sample.
    pub const SAMPLE1_SUGAR: &str = "Sample1_Data.Sugar.Total";
    /// Sugar category, second sample.
    pub const SAMPLE2_SUGAR: &str = "Sample2_Data.Sugar.Total";
    /// Protein, grams per 100 g.
    pub const PROTEIN: &str = "Data.Protein";
    /// Total lipid, grams per 100 g.
    pub const FAT: &str = "Data.Fat.Total.Lipid";
    /// Vitamin B12, micrograms per 100 g.
    pub const VITAMIN_B12: &str = "Data.Vitamins.Vitamin.B12";
    /// Magnesium, milligrams per 100 g.
    pub const MAGNESIUM: &str = "Data.Major.Minerals.Magnesium";
    /// Precomputed sample means.
    pub const SAMPLE_MEANS: &str = "Medias_Muestrales_30";
    /// Precomputed sample proportions.
    pub const SAMPLE_PROPORTIONS: &str = "Proporciones_Muestrales_30";
}

/// Sugar content class of a food item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SugarCategory {
    /// Lowest sugar content.
    S1,
    /// Second class.
    S2,
    /// Middle class.
    S3,
    /// Fourth class.
    S4,
    /// Highest sugar content.
    S5,
}

impl SugarCategory {
    /// Every category, lowest first.
    pub const ALL: [SugarCategory; 5] = [Self::S1, Self::S2, Self::S3, Self::S4, Self::S5];

    /// Label as written in the data, e.g. `S3`.
    pub fn label(self) -> &'static str {
        match self {
            Self::S1 => "S1",
            Self::S2 => "S2",
            Self::S3 => "S3",
            Self::S4 => "S4",
            Self::S5 => "S5",
        }
    }
}

impl fmt::Display for SugarCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SugarCategory {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.label() == s.trim())
            .ok_or_else(|| Error::UnknownCategory(s.to_string()))
    }
}

/// Value type of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    /// Floating-point values.
    Numeric,
    /// [`SugarCategory`] labels.
    Categorical,
}

/// Borrowed view of one column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColumnRef<'a> {
    /// Floating-point column.
    Numeric(&'a [f64]),
    /// Sugar-category column.
    Categorical(&'a [SugarCategory]),
}

impl<'a> ColumnRef<'a> {
    /// Number of values.
    pub fn len(&self) -> usize {
        match self {
            Self::Numeric(v) => v.len(),
            Self::Categorical(v) => v.len(),
        }
    }

    /// Whether there are no values.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Numeric or categorical.
    pub fn kind(&self) -> ColumnKind {
        match self {
            Self::Numeric(_) => ColumnKind::Numeric,
            Self::Categorical(_) => ColumnKind::Categorical,
        }
    }

    /// Values of a numeric column, `None` for a categorical one.
    pub fn as_numeric(&self) -> Option<&'a [f64]> {
        match *self {
            Self::Numeric(v) => Some(v),
            Self::Categorical(_) => None,
        }
    }

    /// Labels of a categorical column, `None` for a numeric one.
    pub fn as_categorical(&self) -> Option<&'a [SugarCategory]> {
        match *self {
            Self::Categorical(v) => Some(v),
            Self::Numeric(_) => None,
        }
    }
}

/// Kind and fixed length of every column, in key order.
pub const LAYOUT: [(&str, ColumnKind, usize); 10] = [
    (keys::SAMPLE1_CARBOHYDRATE, ColumnKind::Numeric, 20),
    (keys::SAMPLE2_CARBOHYDRATE, ColumnKind::Numeric, 20),
    (keys::SAMPLE1_SUGAR, ColumnKind::Categorical, 20),
    (keys::SAMPLE2_SUGAR, ColumnKind::Categorical, 20),
    (keys::PROTEIN, ColumnKind::Numeric, 20),
    (keys::FAT, ColumnKind::Numeric, 20),
    (keys::VITAMIN_B12, ColumnKind::Numeric, 20),
    (keys::MAGNESIUM, ColumnKind::Numeric, 20),
    (keys::SAMPLE_MEANS, ColumnKind::Numeric, 30),
    (keys::SAMPLE_PROPORTIONS, ColumnKind::Numeric, 30),
];

/// Teaching data for the course, one field per column.
#[derive(Debug, Clone, PartialEq)]
pub struct CourseData {
    /// [`keys::SAMPLE1_CARBOHYDRATE`]
    pub sample1_carbohydrate: Sample<f64>,
    /// [`keys::SAMPLE2_CARBOHYDRATE`]
    pub sample2_carbohydrate: Sample<f64>,
    /// [`keys::SAMPLE1_SUGAR`]
    pub sample1_sugar: Sample<SugarCategory>,
    /// [`keys::SAMPLE2_SUGAR`]
    pub sample2_sugar: Sample<SugarCategory>,
    /// Protein content.
    pub protein: Sample<f64>,
    /// Total lipid content.
    pub fat: Sample<f64>,
    /// Vitamin B12 content; has zeros.
    pub vitamin_b12: Sample<f64>,
    /// Magnesium content.
    pub magnesium: Sample<f64>,
    /// Precomputed sample means (30 values).
    pub sample_means: Sample<f64>,
    /// Precomputed sample proportions (30 values in `[0, 1]`).
    pub sample_proportions: Sample<f64>,
}

/// Returns the course data set. Every call yields identical values.
pub fn define_data() -> CourseData {
    trace!("building course data from fixtures");
    CourseData {
        sample1_carbohydrate: Sample::from(&fixtures::SAMPLE1_CARBOHYDRATE[..]),
        sample2_carbohydrate: Sample::from(&fixtures::SAMPLE2_CARBOHYDRATE[..]),
        sample1_sugar: Sample::from(&fixtures::SAMPLE1_SUGAR[..]),
        sample2_sugar: Sample::from(&fixtures::SAMPLE2_SUGAR[..]),
        protein: Sample::from(&fixtures::PROTEIN[..]),
        fat: Sample::from(&fixtures::FAT[..]),
        vitamin_b12: Sample::from(&fixtures::VITAMIN_B12[..]),
        magnesium: Sample::from(&fixtures::MAGNESIUM[..]),
        sample_means: Sample::from(&fixtures::SAMPLE_MEANS[..]),
        sample_proportions: Sample::from(&fixtures::SAMPLE_PROPORTIONS[..]),
    }
}

impl CourseData {
    /// Columns in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, ColumnRef<'_>)> {
        use ColumnRef::{Categorical, Numeric};
        [
            (keys::SAMPLE1_CARBOHYDRATE, Numeric(self.sample1_carbohydrate.as_ref())),
            (keys::SAMPLE2_CARBOHYDRATE, Numeric(self.sample2_carbohydrate.as_ref())),
            (keys::SAMPLE1_SUGAR, Categorical(self.sample1_sugar.as_ref())),
            (keys::SAMPLE2_SUGAR, Categorical(self.sample2_sugar.as_ref())),
            (keys::PROTEIN, Numeric(self.protein.as_ref())),
            (keys::FAT, Numeric(self.fat.as_ref())),
            (keys::VITAMIN_B12, Numeric(self.vitamin_b12.as_ref())),
            (keys::MAGNESIUM, Numeric(self.magnesium.as_ref())),
            (keys::SAMPLE_MEANS, Numeric(self.sample_means.as_ref())),
            (keys::SAMPLE_PROPORTIONS, Numeric(self.sample_proportions.as_ref())),
        ]
        .into_iter()
    }

    /// Column keys in order.
    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.iter().map(|(key, _)| key)
    }

    /// Column by key, `None` if the key is unknown.
    pub fn get(&self, key: &str) -> Option<ColumnRef<'_>> {
        self.iter().find(|(k, _)| *k == key).map(|(_, column)| column)
    }

    /// Numeric column by key; fails on unknown or categorical keys.
    pub fn numeric(&self, key: &str) -> Result<&[f64], Error> {
        self.get(key)
            .and_then(|column| column.as_numeric())
            .ok_or_else(|| Error::UnknownColumn(key.to_string()))
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        LAYOUT.len()
    }

    /// Always `false`: the data set has a fixed set of columns.
    pub fn is_empty(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use itertools::Itertools;
    use SugarCategory::*;

    #[test]
    fn ten_columns_with_fixed_lengths() {
        let data = define_data();
        assert_eq!(data.len(), 10);
        assert_eq!(data.keys().count(), 10);
        for ((key, column), (layout_key, kind, len)) in data.iter().zip(LAYOUT) {
            assert_eq!(key, layout_key);
            assert_eq!(column.kind(), kind, "{key}");
            assert_eq!(column.len(), len, "{key}");
        }
        assert!(data.keys().all_unique());
    }

    #[test]
    fn first_carbohydrate_values() {
        let carbs = define_data().sample1_carbohydrate;
        assert_eq!(carbs[0], 0.0);
        assert_relative_eq!(carbs[1], 0.5828941, epsilon = 1e-12);
        assert!(carbs.iter().all(|x| (0.0..1.0).contains(x)));
    }

    #[test]
    fn first_sugar_sample_is_exact() {
        let data = define_data();
        assert_eq!(
            data.sample1_sugar.as_ref(),
            &[S1, S2, S1, S2, S3, S1, S1, S1, S1, S1, S1, S1, S4, S3, S2, S1, S2, S1, S1, S5]
        );
        let labels = data.sample1_sugar.iter().map(ToString::to_string).join(",");
        assert!(labels.starts_with("S1,S2,S1,S2,S3"));
    }

    #[test]
    fn bounded_columns() {
        let data = define_data();
        assert!(data.sample_proportions.iter().all(|p| (0.0..=1.0).contains(p)));
        assert!(data.vitamin_b12.iter().all(|x| *x >= 0.0));
        assert!(data.vitamin_b12.iter().any(|x| *x == 0.0));
        for key in [keys::PROTEIN, keys::FAT, keys::MAGNESIUM] {
            assert!(data.numeric(key).unwrap().iter().all(|x| *x >= 0.0), "{key}");
        }
    }

    #[test]
    fn repeated_calls_are_identical() {
        let a = define_data();
        let b = define_data();
        for ((_, x), (_, y)) in a.iter().zip(b.iter()) {
            match (x, y) {
                (ColumnRef::Numeric(x), ColumnRef::Numeric(y)) => {
                    assert!(x.iter().zip(y).all(|(p, q)| p.to_bits() == q.to_bits()));
                }
                _ => assert_eq!(x, y),
            }
        }
    }

    #[test]
    fn lookup_by_key() {
        let data = define_data();
        assert_eq!(data.get(keys::SAMPLE_MEANS).map(|c| c.len()), Some(30));
        assert!(data.get("Data.Sodium").is_none());
        assert!(matches!(data.numeric(keys::SAMPLE1_SUGAR), Err(Error::UnknownColumn(_))));
    }

    #[test]
    fn sugar_labels_parse() {
        assert_eq!(" S4".parse::<SugarCategory>().unwrap(), S4);
        assert!(matches!("S6".parse::<SugarCategory>(), Err(Error::UnknownCategory(_))));
        let data = define_data();
        let mode = data.sample1_sugar.iter().counts().into_iter().max_by_key(|(_, n)| *n);
        assert_eq!(mode, Some((&S1, 12)));
    }
}
