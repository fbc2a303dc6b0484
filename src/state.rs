use crate::client::FareSeriesBuilder;
use crate::models::{ChartView, FareDataset};
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub builder: FareSeriesBuilder,
    pub fares: Arc<FareDataset>,
    pub chart: Arc<Mutex<ChartView>>,
}

impl AppState {
    pub fn new(builder: FareSeriesBuilder, fares: FareDataset) -> Self {
        Self {
            builder,
            fares: Arc::new(fares),
            chart: Arc::new(Mutex::new(ChartView::default())),
        }
    }

    pub async fn snapshot(&self) -> ChartView {
        self.chart.lock().await.clone()
    }

    /// Swaps in a fully built view. The old one stays visible until then.
    pub async fn replace_chart(&self, view: ChartView) {
        *self.chart.lock().await = view;
    }
}
