//! HTTP surface of the dashboard.
//!
//! Serves the page, the static layout and the two chart endpoints. Every
//! request is a pure recomputation over the shared, immutable launch table.
use axum::{
    extract::{Query, State},
    response::Html,
    routing::get,
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::sync::Arc;
use tokio::net::TcpListener;

use crate::core::charts::{pie_chart, scatter_chart};
use crate::core::dataset::LaunchTable;
use crate::core::layout::{build_layout, Layout, SliderSettings};
use crate::domain::model::{PayloadRange, PieChart, ScatterChart, SiteSelection, ALL_SITES};
use crate::utils::error::{DashError, Result};

#[derive(Clone)]
pub struct DashboardState {
    table: Arc<LaunchTable>,
    layout: Arc<Layout>,
    loaded_at: DateTime<Utc>,
}

impl DashboardState {
    pub fn new(table: LaunchTable, slider: SliderSettings) -> Self {
        let layout = build_layout(&table, slider);
        Self {
            table: Arc::new(table),
            layout: Arc::new(layout),
            loaded_at: Utc::now(),
        }
    }

    pub fn table(&self) -> &LaunchTable {
        &self.table
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct PieQuery {
    pub site: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ScatterQuery {
    pub site: Option<String>,
    pub low: Option<f64>,
    pub high: Option<f64>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub records: usize,
    pub sites: usize,
    pub skipped_rows: usize,
    pub loaded_at: DateTime<Utc>,
}

pub fn router(state: DashboardState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/api/layout", get(layout))
        .route("/api/charts/pie", get(pie))
        .route("/api/charts/scatter", get(scatter))
        .route("/health", get(health))
        .with_state(state)
}

/// Bind `addr` and serve until Ctrl-C.
pub async fn serve(state: DashboardState, addr: &str) -> Result<()> {
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| DashError::ServerError {
            message: format!("cannot bind {}: {}", addr, e),
        })?;
    serve_with_shutdown(listener, state, shutdown_signal()).await
}

pub async fn serve_with_shutdown<F>(
    listener: TcpListener,
    state: DashboardState,
    shutdown: F,
) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let local_addr = listener.local_addr()?;
    tracing::info!("🚀 Dashboard listening on http://{}", local_addr);

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(|e| DashError::ServerError {
            message: e.to_string(),
        })?;

    tracing::info!("Dashboard stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

async fn layout(State(state): State<DashboardState>) -> Json<Layout> {
    Json(state.layout().clone())
}

async fn pie(State(state): State<DashboardState>, Query(query): Query<PieQuery>) -> Json<PieChart> {
    let selection = SiteSelection::parse(query.site.as_deref().unwrap_or(ALL_SITES));
    let chart = pie_chart(state.table(), &selection);
    tracing::debug!(site = %selection, slices = chart.slices.len(), "pie chart");
    Json(chart)
}

async fn scatter(
    State(state): State<DashboardState>,
    Query(query): Query<ScatterQuery>,
) -> Json<ScatterChart> {
    let selection = SiteSelection::parse(query.site.as_deref().unwrap_or(ALL_SITES));
    let [default_low, default_high] = state.layout().payload_slider.value;
    let range = PayloadRange::new(
        query.low.unwrap_or(default_low),
        query.high.unwrap_or(default_high),
    );
    let chart = scatter_chart(state.table(), &selection, range);
    tracing::debug!(
        site = %selection,
        low = range.low,
        high = range.high,
        points = chart.len(),
        "scatter chart"
    );
    Json(chart)
}

async fn health(State(state): State<DashboardState>) -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "ok".to_string(),
        records: state.table().len(),
        sites: state.table().sites().len(),
        skipped_rows: state.table().skipped_rows(),
        loaded_at: state.loaded_at,
    })
}

const INDEX_HTML: &str = r#"<!doctype html>
<html>
  <head>
    <meta charset="utf-8" />
    <title>SpaceX Launch Records Dashboard</title>
    <script src="https://cdn.jsdelivr.net/npm/chart.js"></script>
    <style>
      body { font-family: system-ui, sans-serif; margin: 0 auto; max-width: 960px; padding: 16px; }
      h1 { text-align: center; color: #503D36; font-size: 40px; }
      select { width: 100%; padding: 6px; font-size: 16px; }
      .chart { margin: 24px 0; }
      .slider { display: flex; gap: 12px; align-items: center; }
      .slider input { flex: 1; }
      .marks { display: flex; justify-content: space-between; color: #666; font-size: 12px; }
    </style>
  </head>
  <body>
    <h1 id="title"></h1>
    <select id="site-dropdown"></select>
    <div class="chart"><canvas id="success-pie-chart"></canvas></div>
    <p id="slider-label"></p>
    <div class="slider">
      <input id="payload-low" type="range" />
      <input id="payload-high" type="range" />
    </div>
    <div class="marks" id="slider-marks"></div>
    <p id="slider-value"></p>
    <div class="chart"><canvas id="success-payload-scatter-chart"></canvas></div>
    <script>
      const charts = {};
      const $ = (id) => document.getElementById(id);

      function draw(id, config) {
        if (charts[id]) charts[id].destroy();
        charts[id] = new Chart($(id), config);
      }

      async function refreshPie() {
        const site = $('site-dropdown').value;
        const res = await fetch('/api/charts/pie?site=' + encodeURIComponent(site));
        const chart = await res.json();
        draw('success-pie-chart', {
          type: 'pie',
          data: {
            labels: chart.slices.map((s) => s.label),
            datasets: [{ data: chart.slices.map((s) => s.value) }],
          },
          options: { plugins: { title: { display: true, text: chart.title } } },
        });
      }

      async function refreshScatter() {
        const site = $('site-dropdown').value;
        const low = $('payload-low').value;
        const high = $('payload-high').value;
        $('slider-value').textContent = low + ' - ' + high + ' kg';
        const params = new URLSearchParams({ site, low, high });
        const res = await fetch('/api/charts/scatter?' + params);
        const chart = await res.json();
        draw('success-payload-scatter-chart', {
          type: 'scatter',
          data: {
            datasets: chart.series.map((s) => ({
              label: s.category,
              data: s.points.map((i) => ({ x: chart.points[i].x, y: chart.points[i].y })),
            })),
          },
          options: {
            plugins: { title: { display: true, text: chart.title } },
            scales: {
              x: { title: { display: true, text: 'Payload Mass (kg)' } },
              y: { title: { display: true, text: 'class' }, min: -0.5, max: 1.5, ticks: { stepSize: 1 } },
            },
          },
        });
      }

      async function init() {
        const layout = await (await fetch('/api/layout')).json();
        $('title').textContent = layout.title;

        const dropdown = $('site-dropdown');
        for (const option of layout.site_dropdown.options) {
          const el = document.createElement('option');
          el.value = option.value;
          el.textContent = option.label;
          dropdown.appendChild(el);
        }
        dropdown.value = layout.site_dropdown.value;

        const slider = layout.payload_slider;
        $('slider-label').textContent = slider.label;
        for (const id of ['payload-low', 'payload-high']) {
          const input = $(id);
          input.min = slider.min;
          input.max = slider.max;
          input.step = slider.step;
          input.addEventListener('change', refreshScatter);
        }
        $('payload-low').value = slider.value[0];
        $('payload-high').value = slider.value[1];
        $('slider-marks').innerHTML = slider.marks.map((m) => '<span>' + m.label + '</span>').join('');

        dropdown.addEventListener('change', () => { refreshPie(); refreshScatter(); });
        await Promise.all([refreshPie(), refreshScatter()]);
      }

      init();
    </script>
  </body>
</html>
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{LaunchRecord, Outcome};

    fn state() -> DashboardState {
        DashboardState::new(
            LaunchTable::from_records(vec![
                LaunchRecord::new("A", 500.0, "v1.0", Outcome::Success),
                LaunchRecord::new("A", 600.0, "FT", Outcome::Failure),
                LaunchRecord::new("B", 700.0, "FT", Outcome::Success),
            ]),
            SliderSettings::default(),
        )
    }

    #[tokio::test]
    async fn test_pie_handler_defaults_to_all_sites() {
        let Json(chart) = pie(State(state()), Query(PieQuery::default())).await;
        assert_eq!(chart.labels(), vec!["A", "B"]);
        assert_eq!(chart.values(), vec![1, 1]);
    }

    #[tokio::test]
    async fn test_scatter_handler_defaults_to_data_bounds() {
        // 預設範圍是資料的最小/最大值，兩端皆不包含
        let Json(chart) = scatter(State(state()), Query(ScatterQuery::default())).await;
        assert_eq!(chart.len(), 1);
        assert_eq!(chart.points[0].x, 600.0);
    }

    #[tokio::test]
    async fn test_scatter_handler_with_explicit_range() {
        let query = ScatterQuery {
            site: Some("A".to_string()),
            low: Some(400.0),
            high: Some(800.0),
        };
        let Json(chart) = scatter(State(state()), Query(query)).await;
        assert_eq!(chart.len(), 2);
        assert_eq!(chart.title, "Connection between Payload and Success for A");
    }

    #[tokio::test]
    async fn test_health_reports_table_size() {
        let Json(health) = health(State(state())).await;
        assert_eq!(health.status, "ok");
        assert_eq!(health.records, 3);
        assert_eq!(health.sites, 2);
    }
}
