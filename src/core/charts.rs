//! Chart aggregations behind the two dashboard widgets.
//!
//! Both functions are pure: they read the immutable [`LaunchTable`] and the
//! current widget values and never fail. Unknown sites and empty or inverted
//! payload ranges simply produce empty charts.

use crate::core::dataset::LaunchTable;
use crate::domain::model::{
    Outcome, PayloadRange, PieChart, PieSlice, ScatterChart, ScatterPoint, ScatterSeries,
    SiteSelection,
};
use std::collections::BTreeMap;

pub fn pie_chart(table: &LaunchTable, selection: &SiteSelection) -> PieChart {
    match selection {
        SiteSelection::All => {
            // 每個發射場的成功次數
            let mut successes: BTreeMap<&str, u64> = BTreeMap::new();
            for record in table.records() {
                *successes.entry(record.launch_site.as_str()).or_default() +=
                    u64::from(record.outcome.flag());
            }

            PieChart {
                title: "Total Success Launches by Site".to_string(),
                slices: successes
                    .into_iter()
                    .map(|(site, value)| PieSlice {
                        label: site.to_string(),
                        value,
                    })
                    .collect(),
            }
        }
        SiteSelection::Site(site) => {
            let mut counts: BTreeMap<Outcome, u64> = BTreeMap::new();
            for record in table.records().iter().filter(|r| &r.launch_site == site) {
                *counts.entry(record.outcome).or_default() += 1;
            }

            PieChart {
                title: format!("Total Success Launches for site {}", site),
                slices: counts
                    .into_iter()
                    .map(|(outcome, value)| PieSlice {
                        label: outcome.label().to_string(),
                        value,
                    })
                    .collect(),
            }
        }
    }
}

pub fn scatter_chart(
    table: &LaunchTable,
    selection: &SiteSelection,
    range: PayloadRange,
) -> ScatterChart {
    let title = match selection {
        SiteSelection::All => "Connection between Payload and Success for all Sites".to_string(),
        SiteSelection::Site(site) => format!("Connection between Payload and Success for {}", site),
    };

    let points: Vec<ScatterPoint> = table
        .records()
        .iter()
        .filter(|r| range.contains(r.payload_mass_kg))
        .filter(|r| selection.matches(&r.launch_site))
        .map(|r| ScatterPoint {
            x: r.payload_mass_kg,
            y: r.outcome.flag(),
            category: r.booster_version_category.clone(),
        })
        .collect();

    let mut grouped: BTreeMap<&str, Vec<usize>> = BTreeMap::new();
    for (index, point) in points.iter().enumerate() {
        grouped.entry(point.category.as_str()).or_default().push(index);
    }
    let series = grouped
        .into_iter()
        .map(|(category, points)| ScatterSeries {
            category: category.to_string(),
            points,
        })
        .collect();

    ScatterChart {
        title,
        points,
        series,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::LaunchRecord;

    fn example_table() -> LaunchTable {
        LaunchTable::from_records(vec![
            LaunchRecord::new("A", 500.0, "v1.0", Outcome::Success),
            LaunchRecord::new("A", 600.0, "FT", Outcome::Failure),
            LaunchRecord::new("B", 700.0, "FT", Outcome::Success),
        ])
    }

    fn mixed_table() -> LaunchTable {
        LaunchTable::from_records(vec![
            LaunchRecord::new("CCAFS LC-40", 0.0, "v1.0", Outcome::Failure),
            LaunchRecord::new("CCAFS LC-40", 2296.0, "v1.1", Outcome::Success),
            LaunchRecord::new("CCAFS LC-40", 4707.0, "FT", Outcome::Failure),
            LaunchRecord::new("KSC LC-39A", 2490.0, "FT", Outcome::Success),
            LaunchRecord::new("KSC LC-39A", 5300.0, "FT", Outcome::Success),
            LaunchRecord::new("KSC LC-39A", 9600.0, "B5", Outcome::Success),
            LaunchRecord::new("VAFB SLC-4E", 500.0, "v1.1", Outcome::Failure),
            LaunchRecord::new("VAFB SLC-4E", 9600.0, "FT", Outcome::Success),
        ])
    }

    #[test]
    fn test_pie_all_sites_example() {
        let chart = pie_chart(&example_table(), &SiteSelection::All);
        assert_eq!(chart.title, "Total Success Launches by Site");
        assert_eq!(chart.labels(), vec!["A", "B"]);
        assert_eq!(chart.values(), vec![1, 1]);
    }

    #[test]
    fn test_pie_single_site_example() {
        let chart = pie_chart(&example_table(), &SiteSelection::Site("A".to_string()));
        assert_eq!(chart.title, "Total Success Launches for site A");
        assert_eq!(chart.value_of("Success"), Some(1));
        assert_eq!(chart.value_of("Failure"), Some(1));
        assert_eq!(chart.labels(), vec!["Failure", "Success"]);
    }

    #[test]
    fn test_pie_all_sites_counts_successes_per_site() {
        let table = mixed_table();
        let chart = pie_chart(&table, &SiteSelection::All);

        assert_eq!(chart.slices.len(), table.sites().len());
        for site in table.sites() {
            let expected = table
                .records()
                .iter()
                .filter(|r| &r.launch_site == site && r.outcome == Outcome::Success)
                .count() as u64;
            assert_eq!(chart.value_of(site), Some(expected), "site {}", site);
        }
    }

    #[test]
    fn test_pie_single_site_sums_to_row_count() {
        let table = mixed_table();
        for site in table.sites() {
            let chart = pie_chart(&table, &SiteSelection::Site(site.clone()));
            let rows = table
                .records()
                .iter()
                .filter(|r| &r.launch_site == site)
                .count() as u64;
            assert!(chart.slices.len() <= 2);
            assert_eq!(chart.total(), rows);
        }

        // 只有成功紀錄的發射場只會有一片
        let ksc = pie_chart(&table, &SiteSelection::Site("KSC LC-39A".to_string()));
        assert_eq!(ksc.labels(), vec!["Success"]);
        assert_eq!(ksc.values(), vec![3]);
    }

    #[test]
    fn test_pie_unknown_site_is_empty() {
        let chart = pie_chart(&example_table(), &SiteSelection::Site("Boca Chica".to_string()));
        assert!(chart.slices.is_empty());
        assert_eq!(chart.total(), 0);
    }

    #[test]
    fn test_scatter_example_ranges() {
        let table = example_table();

        let wide = scatter_chart(&table, &SiteSelection::All, PayloadRange::new(400.0, 800.0));
        assert_eq!(wide.len(), 3);
        assert_eq!(
            wide.title,
            "Connection between Payload and Success for all Sites"
        );

        let narrow = scatter_chart(&table, &SiteSelection::All, PayloadRange::new(550.0, 800.0));
        assert_eq!(narrow.len(), 2);
        assert!(narrow.points.iter().all(|p| p.x > 550.0 && p.x < 800.0));
    }

    #[test]
    fn test_scatter_bounds_are_exclusive() {
        let table = example_table();
        let chart = scatter_chart(&table, &SiteSelection::All, PayloadRange::new(500.0, 700.0));
        assert_eq!(chart.len(), 1);
        assert_eq!(chart.points[0].x, 600.0);
        assert_eq!(chart.points[0].y, 0);
    }

    #[test]
    fn test_scatter_site_filter() {
        let table = mixed_table();
        let chart = scatter_chart(
            &table,
            &SiteSelection::Site("KSC LC-39A".to_string()),
            PayloadRange::new(0.0, 10000.0),
        );
        assert_eq!(chart.len(), 3);
        assert_eq!(
            chart.title,
            "Connection between Payload and Success for KSC LC-39A"
        );
        assert!(chart.points.iter().all(|p| p.y == 1));
    }

    #[test]
    fn test_scatter_keeps_every_qualifying_row() {
        let table = mixed_table();
        let range = PayloadRange::new(400.0, 9600.0);
        let chart = scatter_chart(&table, &SiteSelection::All, range);

        let expected: Vec<f64> = table
            .records()
            .iter()
            .map(|r| r.payload_mass_kg)
            .filter(|p| *p > 400.0 && *p < 9600.0)
            .collect();
        let actual: Vec<f64> = chart.points.iter().map(|p| p.x).collect();
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_scatter_inverted_or_empty_range() {
        let table = mixed_table();
        for (low, high) in [(8000.0, 1000.0), (2490.0, 2490.0)] {
            let chart = scatter_chart(&table, &SiteSelection::All, PayloadRange::new(low, high));
            assert!(chart.is_empty());
            assert!(chart.series.is_empty());
        }
    }

    #[test]
    fn test_scatter_unknown_site_is_empty() {
        let chart = scatter_chart(
            &mixed_table(),
            &SiteSelection::Site("Starbase".to_string()),
            PayloadRange::new(0.0, 10000.0),
        );
        assert!(chart.is_empty());
        assert!(chart.series.is_empty());
        assert_eq!(
            chart.title,
            "Connection between Payload and Success for Starbase"
        );
    }

    #[test]
    fn test_scatter_series_group_by_booster() {
        let table = mixed_table();
        let chart = scatter_chart(&table, &SiteSelection::All, PayloadRange::new(-1.0, 10000.0));

        let categories: Vec<&str> = chart.series.iter().map(|s| s.category.as_str()).collect();
        assert_eq!(categories, vec!["B5", "FT", "v1.0", "v1.1"]);

        let grouped: usize = chart.series.iter().map(|s| s.points.len()).sum();
        assert_eq!(grouped, chart.len());
        for series in &chart.series {
            for &index in &series.points {
                assert_eq!(chart.points[index].category, series.category);
            }
        }
    }
}
