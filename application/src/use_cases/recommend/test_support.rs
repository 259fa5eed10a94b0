//! In-memory collaborators shared by the recommendation tests.

use super::RecommendationOrchestrator;
use super::types::{ChoreRequest, RecommendationRequest, SuggestionRequest};
use crate::ports::llm_gateway::{CompletionGateway, SuggestionError};
use crate::ports::progress::{ProgressNotifier, Step};
use crate::ports::record_store::{RecordStore, StoreError};
use crate::ports::weather_provider::{WeatherError, WeatherProvider};
use advisor_domain::{
    Chore, ChoreCompletionRecord, ChoreId, CurrentWeather, DailyWeather, DaySchedule, Forecast,
    HourlyWeatherSample, OutingSlot, UserId, UserInfo, UserPreference,
};
use async_trait::async_trait;
use chrono::{DateTime, Duration as ChronoDuration, NaiveDate, TimeZone, Utc};
use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

pub(crate) fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 7, 3, 12, 0, 0).unwrap()
}

pub(crate) fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 7, 3).unwrap()
}

fn user() -> UserId {
    UserId::parse("user-1").unwrap()
}

// ==================== Store ====================

#[derive(Default)]
pub(crate) struct MockStore {
    pub(crate) chores: Vec<Chore>,
    pub(crate) history: Vec<ChoreCompletionRecord>,
    pub(crate) fail_chores: bool,
    pub(crate) fail_history: bool,
    pub(crate) catalog_reads: AtomicUsize,
    pub(crate) history_reads: AtomicUsize,
    pub(crate) writes: AtomicUsize,
    pub(crate) preferences: Mutex<HashMap<String, UserPreference>>,
}

impl MockStore {
    /// laundry (clear, every 3 days, never done), vacuuming (rain, every
    /// 2 days, done yesterday), windows (clear, every 14 days, done a week ago)
    pub(crate) fn with_catalog() -> Self {
        let chores = vec![
            Chore::new("c-laundry", "laundry", ["clear"], 3.0).unwrap(),
            Chore::new("c-vacuum", "vacuuming", ["rain"], 2.0).unwrap(),
            Chore::new("c-windows", "windows", ["clear"], 14.0).unwrap(),
        ];
        let history = vec![
            ChoreCompletionRecord {
                chore_id: ChoreId::from("c-vacuum"),
                user_id: user(),
                completed_at: fixed_now() - ChronoDuration::days(1),
            },
            ChoreCompletionRecord {
                chore_id: ChoreId::from("c-windows"),
                user_id: user(),
                completed_at: fixed_now() - ChronoDuration::days(7),
            },
        ];
        Self {
            chores,
            history,
            ..Self::default()
        }
    }

    pub(crate) fn catalog_reads(&self) -> usize {
        self.catalog_reads.load(Ordering::SeqCst)
    }

    pub(crate) fn history_reads(&self) -> usize {
        self.history_reads.load(Ordering::SeqCst)
    }

    pub(crate) fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    fn record_write(&self) {
        self.writes.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl RecordStore for MockStore {
    async fn get_chores(&self) -> Result<Vec<Chore>, StoreError> {
        self.catalog_reads.fetch_add(1, Ordering::SeqCst);
        if self.fail_chores {
            return Err(StoreError::ConnectionError("chores unavailable".to_string()));
        }
        Ok(self.chores.clone())
    }

    async fn get_completion_history(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<ChoreCompletionRecord>, StoreError> {
        self.history_reads.fetch_add(1, Ordering::SeqCst);
        if self.fail_history {
            return Err(StoreError::ConnectionError("history unavailable".to_string()));
        }
        let mut records: Vec<_> = self
            .history
            .iter()
            .filter(|r| &r.user_id == user_id)
            .cloned()
            .collect();
        records.sort_by(|a, b| b.completed_at.cmp(&a.completed_at));
        Ok(records)
    }

    async fn get_user_preference(
        &self,
        user_id: &UserId,
    ) -> Result<Option<UserPreference>, StoreError> {
        Ok(self
            .preferences
            .lock()
            .unwrap()
            .get(user_id.as_str())
            .cloned())
    }

    async fn set_user_preference(&self, preference: &UserPreference) -> Result<(), StoreError> {
        self.record_write();
        self.preferences
            .lock()
            .unwrap()
            .insert(preference.user_id.as_str().to_string(), preference.clone());
        Ok(())
    }

    async fn insert_suggestion(&self, _user_id: &UserId, _text: &str) -> Result<(), StoreError> {
        self.record_write();
        Ok(())
    }

    async fn set_chore_selection(
        &self,
        _user_id: &UserId,
        _chore_ids: &[ChoreId],
    ) -> Result<(), StoreError> {
        self.record_write();
        Ok(())
    }

    async fn insert_completion(&self, _record: &ChoreCompletionRecord) -> Result<(), StoreError> {
        self.record_write();
        Ok(())
    }
}

// ==================== Weather ====================

pub(crate) struct MockWeather {
    current: Result<CurrentWeather, WeatherError>,
    forecast: Result<Forecast, WeatherError>,
    delay: Duration,
}

/// Two days of hourly samples; rain is likely at 13:00 on the first day.
pub(crate) fn two_day_forecast() -> Forecast {
    let tomorrow = today().succ_opt().unwrap();
    let hourly = [today(), tomorrow]
        .into_iter()
        .flat_map(|date| {
            (0..24).map(move |hour| {
                let rainy = date == today() && hour == 13;
                HourlyWeatherSample {
                    time: date.and_hms_opt(hour, 0, 0).unwrap(),
                    temperature_c: 22.0 + (hour % 10) as f64,
                    humidity: 60,
                    wind_speed: 2.0,
                    precipitation_probability: if rainy { 80 } else { 10 },
                }
            })
        })
        .collect();
    Forecast {
        hourly,
        daily: vec![
            DailyWeather {
                date: today(),
                uv_index_max: Some(7.5),
            },
            DailyWeather {
                date: tomorrow,
                uv_index_max: Some(6.0),
            },
        ],
    }
}

/// [`two_day_forecast`] moved `days` days later
pub(crate) fn shifted_forecast(days: i64) -> Forecast {
    let mut forecast = two_day_forecast();
    for sample in &mut forecast.hourly {
        sample.time = sample.time + ChronoDuration::days(days);
    }
    for day in &mut forecast.daily {
        day.date = day.date + ChronoDuration::days(days);
    }
    forecast
}

impl MockWeather {
    pub(crate) fn clear() -> Self {
        Self {
            current: Ok(CurrentWeather::new("Clear", 27.5)),
            forecast: Ok(two_day_forecast()),
            delay: Duration::ZERO,
        }
    }

    /// Forecast covering only the first day
    pub(crate) fn single_day() -> Self {
        let mut forecast = two_day_forecast();
        forecast.hourly.retain(|s| s.date() == today());
        forecast.daily.truncate(1);
        Self {
            forecast: Ok(forecast),
            ..Self::clear()
        }
    }

    pub(crate) fn with_forecast(forecast: Forecast) -> Self {
        Self {
            forecast: Ok(forecast),
            ..Self::clear()
        }
    }

    pub(crate) fn failing(error: WeatherError) -> Self {
        Self {
            current: Err(error.clone()),
            forecast: Err(error),
            delay: Duration::ZERO,
        }
    }

    pub(crate) fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    async fn pause(&self) {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
    }
}

#[async_trait]
impl WeatherProvider for MockWeather {
    async fn current_weather(&self, _location: &str) -> Result<CurrentWeather, WeatherError> {
        self.pause().await;
        self.current.clone()
    }

    async fn forecast(&self, _latitude: f64, _longitude: f64) -> Result<Forecast, WeatherError> {
        self.pause().await;
        self.forecast.clone()
    }
}

// ==================== Model ====================

/// Replies are handed out in call order, each after its configured delay.
pub(crate) struct MockGateway {
    responses: Mutex<VecDeque<String>>,
    delays: Mutex<VecDeque<Duration>>,
    failure: Option<SuggestionError>,
    calls: AtomicUsize,
    last_prompt: Mutex<Option<String>>,
}

impl MockGateway {
    pub(crate) fn new<I, S>(responses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            responses: Mutex::new(responses.into_iter().map(Into::into).collect()),
            delays: Mutex::new(VecDeque::new()),
            failure: None,
            calls: AtomicUsize::new(0),
            last_prompt: Mutex::new(None),
        }
    }

    pub(crate) fn failing(error: SuggestionError) -> Self {
        Self {
            failure: Some(error),
            ..Self::new(Vec::<String>::new())
        }
    }

    pub(crate) fn with_delays(self, delays: impl IntoIterator<Item = Duration>) -> Self {
        *self.delays.lock().unwrap() = delays.into_iter().collect();
        self
    }

    pub(crate) fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub(crate) fn last_prompt(&self) -> Option<String> {
        self.last_prompt.lock().unwrap().clone()
    }
}

#[async_trait]
impl CompletionGateway for MockGateway {
    async fn complete(&self, prompt: &str) -> Result<String, SuggestionError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_prompt.lock().unwrap() = Some(prompt.to_string());

        let reply = match &self.failure {
            Some(error) => Err(error.clone()),
            None => self
                .responses
                .lock()
                .unwrap()
                .pop_front()
                .ok_or_else(|| SuggestionError::MalformedResponse("no reply queued".to_string())),
        };
        let delay = self.delays.lock().unwrap().pop_front().unwrap_or_default();

        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        reply
    }
}

// ==================== Progress ====================

#[derive(Default)]
pub(crate) struct RecordingProgress {
    steps: Mutex<Vec<(Step, bool)>>,
}

impl RecordingProgress {
    pub(crate) fn steps(&self) -> Vec<(Step, bool)> {
        self.steps.lock().unwrap().clone()
    }
}

impl ProgressNotifier for RecordingProgress {
    fn on_step_start(&self, _step: Step) {}

    fn on_step_complete(&self, step: Step, success: bool) {
        self.steps.lock().unwrap().push((step, success));
    }
}

// ==================== Harness ====================

pub(crate) struct Harness {
    pub(crate) orchestrator: RecommendationOrchestrator,
    pub(crate) store: Arc<MockStore>,
    pub(crate) gateway: Arc<MockGateway>,
}

impl Harness {
    pub(crate) fn new(store: MockStore, gateway: MockGateway) -> Self {
        Self::with_weather(store, MockWeather::clear(), gateway)
    }

    pub(crate) fn with_weather(store: MockStore, weather: MockWeather, gateway: MockGateway) -> Self {
        let store = Arc::new(store);
        let gateway = Arc::new(gateway);
        let orchestrator =
            RecommendationOrchestrator::new(store.clone(), Arc::new(weather), gateway.clone());
        Self {
            orchestrator,
            store,
            gateway,
        }
    }
}

pub(crate) fn chore_request() -> RecommendationRequest {
    let preference = UserPreference::new(user(), 0.5, 0.5).unwrap();
    RecommendationRequest::Chores(ChoreRequest::new(preference, "Tokyo").at(fixed_now()))
}

pub(crate) fn suggestion_request() -> RecommendationRequest {
    let user_info = UserInfo {
        chores: vec!["laundry".to_string()],
        items: vec!["umbrella".to_string()],
        schedule: vec![DaySchedule {
            date: today(),
            slots: vec![OutingSlot::new(9, 17).unwrap()],
        }],
        ..UserInfo::default()
    };
    RecommendationRequest::Suggestions(
        SuggestionRequest::new(user_info, 34.6937, 135.5023).on(today()),
    )
}
