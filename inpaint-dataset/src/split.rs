//! Split policies over shuffled file lists.

use crate::common::*;

/// Fraction of files assigned to the training split.
pub const TRAIN_FRACTION: f64 = 0.85;
/// Fraction of files assigned to the validation split.
pub const VALIDATION_FRACTION: f64 = 0.10;

/// The three disjoint split manifests. Their union covers the input
/// list exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitLists {
    pub train: Vec<String>,
    pub validation: Vec<String>,
    pub visual_test: Vec<String>,
}

/// Partition `files` into 85% train / 10% validation / 5% visual-test.
///
/// The list is shuffled once. Train and validation sizes are
/// floor-rounded; the visual-test split takes every remaining entry,
/// which keeps the partition exact despite the rounding on the first
/// two splits.
pub fn percentage_split<R>(mut files: Vec<String>, rng: &mut R) -> SplitLists
where
    R: Rng + ?Sized,
{
    files.shuffle(rng);

    let total = files.len();
    let train_len = (TRAIN_FRACTION * total as f64).floor() as usize;
    let validation_len = (VALIDATION_FRACTION * total as f64).floor() as usize;

    let visual_test = files.split_off(train_len + validation_len);
    let validation = files.split_off(train_len);

    SplitLists {
        train: files,
        validation,
        visual_test,
    }
}

/// Partition `names` into a fixed-size validation split and a train
/// remainder, returned as `(train, validation)`.
///
/// The list is shuffled; the first `validation_count` entries (or all
/// of them, if the list is shorter) become the validation split and
/// everything after them the train split.
pub fn fixed_count_split<R>(
    mut names: Vec<String>,
    validation_count: usize,
    rng: &mut R,
) -> (Vec<String>, Vec<String>)
where
    R: Rng + ?Sized,
{
    names.shuffle(rng);
    let train = names.split_off(validation_count.min(names.len()));
    (train, names)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(count: usize) -> Vec<String> {
        (0..count).map(|index| format!("{}.jpg", index)).collect()
    }

    fn sorted(mut list: Vec<String>) -> Vec<String> {
        list.sort();
        list
    }

    #[test]
    fn percentage_split_is_an_exact_partition() {
        let mut rng = StdRng::seed_from_u64(42);

        for total in [1, 2, 7, 19, 100, 101] {
            let lists = percentage_split(names(total), &mut rng);
            let train_len = (TRAIN_FRACTION * total as f64).floor() as usize;
            let validation_len = (VALIDATION_FRACTION * total as f64).floor() as usize;

            assert_eq!(lists.train.len(), train_len);
            assert_eq!(lists.validation.len(), validation_len);
            assert_eq!(
                lists.visual_test.len(),
                total - train_len - validation_len
            );

            let all = [lists.train, lists.validation, lists.visual_test].concat();
            assert_eq!(sorted(all), sorted(names(total)));
        }
    }

    #[test]
    fn visual_test_absorbs_the_rounding_remainder() {
        let mut rng = StdRng::seed_from_u64(0);

        // floor(0.85 * 99) = 84 and floor(0.10 * 99) = 9, leaving 6
        let lists = percentage_split(names(99), &mut rng);
        assert_eq!(lists.train.len(), 84);
        assert_eq!(lists.validation.len(), 9);
        assert_eq!(lists.visual_test.len(), 6);
    }

    #[test]
    fn fixed_count_split_takes_min_of_count_and_len() {
        let mut rng = StdRng::seed_from_u64(7);

        let (train, validation) = fixed_count_split(names(10), 4, &mut rng);
        assert_eq!(validation.len(), 4);
        assert_eq!(train.len(), 6);

        let (train, validation) = fixed_count_split(names(3), 2000, &mut rng);
        assert!(train.is_empty());
        assert_eq!(validation.len(), 3);
    }

    #[test]
    fn fixed_count_split_drops_nothing() {
        let mut rng = StdRng::seed_from_u64(3);

        let (train, validation) = fixed_count_split(names(50), 20, &mut rng);
        let all = [train, validation].concat();
        assert_eq!(sorted(all), sorted(names(50)));
    }
}
