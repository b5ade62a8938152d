//! One card per county record.

use crate::format::{format_money, format_number};
use hsnap_data::CountySnapshot;

/// A labelled value on a county card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountyMetric {
    pub label: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountyCard {
    pub title: String,
    pub metrics: [CountyMetric; 5],
}

/// Build the cards in the snapshot's county order.
pub fn cards(snapshot: &CountySnapshot) -> Vec<CountyCard> {
    snapshot
        .counties
        .iter()
        .map(|county| CountyCard {
            title: format!("{} County", county.name),
            metrics: [
                CountyMetric {
                    label: "Total Persons",
                    value: format_number(county.persons.total),
                },
                CountyMetric {
                    label: "Total Households",
                    value: format_number(county.households.total),
                },
                CountyMetric {
                    label: "Public Assistance",
                    value: format_number(county.persons.public_assistance),
                },
                CountyMetric {
                    label: "Non-PA",
                    value: format_number(county.persons.non_public_assistance),
                },
                CountyMetric {
                    label: "Total Benefits",
                    value: format!("${}", format_money(county.total_issuance)),
                },
            ],
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use hsnap_data::testing;

    #[test]
    fn test_one_card_per_county_in_order() {
        let dataset = testing::dataset();
        let cards = cards(&dataset.county);
        assert_eq!(cards.len(), dataset.county.counties.len());
        assert_eq!(cards[0].title, "Hawaii County");
        assert_eq!(cards[1].title, "Honolulu County");
    }

    #[test]
    fn test_card_values_are_formatted_source_fields() {
        let dataset = testing::dataset();
        let card = &cards(&dataset.county)[1];
        let values: Vec<(&str, &str)> = card
            .metrics
            .iter()
            .map(|m| (m.label, m.value.as_str()))
            .collect();
        assert_eq!(
            values,
            vec![
                ("Total Persons", "85,000"),
                ("Total Households", "40,000"),
                ("Public Assistance", "15,000"),
                ("Non-PA", "70,000"),
                ("Total Benefits", "$12.5M"),
            ]
        );
    }

    #[test]
    fn test_empty_snapshot_has_no_cards() {
        let mut dataset = testing::dataset();
        dataset.county.counties.clear();
        assert!(cards(&dataset.county).is_empty());
    }
}
