//! In-memory repositories and request helpers for driving the full router
//! without a database.

use std::collections::{BTreeMap, HashSet};
use std::str::FromStr;
use std::sync::{Arc, Mutex};

use algafood_backend_rs::app::App;
use algafood_backend_rs::modules::kitchen::repository::{self as kitchen, Kitchen, KitchenRepository};
use algafood_backend_rs::modules::payment_method::repository::{
    self as payment_method, PaymentMethod, PaymentMethodRepository,
};
use algafood_backend_rs::modules::restaurant::repository::{
    CreateRestaurantPayload, Error, Filters, Restaurant, RestaurantRepository,
    UpdateRestaurantPayload,
};
use algafood_backend_rs::types::{AppContext, Context};
use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Method, Request, Response};
use axum::Router;
use bigdecimal::BigDecimal;
use serde_json::Value;
use tower::ServiceExt;

#[derive(Default)]
struct State {
    kitchens: BTreeMap<i64, Kitchen>,
    payment_methods: BTreeMap<i64, PaymentMethod>,
    restaurants: BTreeMap<i64, Restaurant>,
    in_use: HashSet<i64>,
    next_id: i64,
}

#[derive(Default)]
pub struct InMemoryStore {
    state: Mutex<State>,
}

impl InMemoryStore {
    /// Kitchens 1..=3, payment methods 1..=2, and restaurants 1 and 7.
    /// Restaurant 1 has products attached, so it cannot be deleted.
    pub fn seeded() -> Arc<Self> {
        let store = Self::default();
        {
            let mut state = store.state.lock().unwrap();
            for (id, name) in [(1, "Tailandesa"), (2, "Indiana"), (3, "Brasileira")] {
                state.kitchens.insert(
                    id,
                    Kitchen {
                        id,
                        name: name.to_string(),
                    },
                );
            }
            for (id, description) in [(1, "Cartão de crédito"), (2, "Dinheiro")] {
                state.payment_methods.insert(
                    id,
                    PaymentMethod {
                        id,
                        description: description.to_string(),
                    },
                );
            }
            state.next_id = 8;
        }
        store.insert_restaurant(1, "Thai Gourmet", "10.00", 1, &[1, 2]);
        store.insert_restaurant(7, "Comida Mineira", "5.50", 3, &[2]);
        store.mark_in_use(1);

        Arc::new(store)
    }

    pub fn insert_restaurant(
        &self,
        id: i64,
        name: &str,
        delivery_fee: &str,
        kitchen_id: i64,
        payment_method_ids: &[i64],
    ) {
        let mut state = self.state.lock().unwrap();
        let kitchen = state.kitchens[&kitchen_id].clone();
        let payment_methods = payment_method_ids
            .iter()
            .map(|id| state.payment_methods[id].clone())
            .collect();
        state.restaurants.insert(
            id,
            Restaurant {
                id,
                name: name.to_string(),
                delivery_fee: BigDecimal::from_str(delivery_fee).unwrap(),
                kitchen,
                payment_methods,
                address: None,
                created_at: chrono::Utc::now().naive_utc(),
                updated_at: None,
            },
        );
    }

    pub fn mark_in_use(&self, id: i64) {
        self.state.lock().unwrap().in_use.insert(id);
    }

    pub fn restaurant(&self, id: i64) -> Option<Restaurant> {
        self.state.lock().unwrap().restaurants.get(&id).cloned()
    }

    pub fn restaurant_count(&self) -> usize {
        self.state.lock().unwrap().restaurants.len()
    }
}

impl State {
    fn resolve(
        &self,
        kitchen_id: i64,
        payment_method_ids: &[i64],
    ) -> Result<(Kitchen, Vec<PaymentMethod>), Error> {
        let kitchen = self
            .kitchens
            .get(&kitchen_id)
            .cloned()
            .ok_or(Error::UnexpectedError)?;
        let payment_methods = payment_method_ids
            .iter()
            .map(|id| self.payment_methods.get(id).cloned())
            .collect::<Option<Vec<_>>>()
            .ok_or(Error::UnexpectedError)?;

        Ok((kitchen, payment_methods))
    }
}

#[async_trait]
impl KitchenRepository for InMemoryStore {
    async fn find_by_id(&self, id: i64) -> Result<Option<Kitchen>, kitchen::Error> {
        Ok(self.state.lock().unwrap().kitchens.get(&id).cloned())
    }
}

#[async_trait]
impl PaymentMethodRepository for InMemoryStore {
    async fn find_many_by_ids(
        &self,
        ids: &[i64],
    ) -> Result<Vec<PaymentMethod>, payment_method::Error> {
        let state = self.state.lock().unwrap();
        Ok(ids
            .iter()
            .filter_map(|id| state.payment_methods.get(id).cloned())
            .collect())
    }
}

#[async_trait]
impl RestaurantRepository for InMemoryStore {
    async fn find_many(&self, filters: Filters) -> Result<Vec<Restaurant>, Error> {
        Ok(self
            .state
            .lock()
            .unwrap()
            .restaurants
            .values()
            .filter(|restaurant| filters.matches(restaurant))
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Restaurant>, Error> {
        Ok(self.restaurant(id))
    }

    async fn create(&self, payload: CreateRestaurantPayload) -> Result<Restaurant, Error> {
        let mut state = self.state.lock().unwrap();
        let (kitchen, payment_methods) =
            state.resolve(payload.kitchen_id, &payload.payment_method_ids)?;
        let id = state.next_id;
        state.next_id += 1;

        let restaurant = Restaurant {
            id,
            name: payload.name,
            delivery_fee: payload.delivery_fee,
            kitchen,
            payment_methods,
            address: payload.address,
            created_at: chrono::Utc::now().naive_utc(),
            updated_at: None,
        };
        state.restaurants.insert(id, restaurant.clone());

        Ok(restaurant)
    }

    async fn update_by_id(
        &self,
        id: i64,
        payload: UpdateRestaurantPayload,
    ) -> Result<Restaurant, Error> {
        let mut state = self.state.lock().unwrap();
        let current = state.restaurants.get(&id).cloned().ok_or(Error::NotFound)?;
        let payment_method_ids = payload.payment_method_ids.unwrap_or_else(|| {
            current
                .payment_methods
                .iter()
                .map(|method| method.id)
                .collect()
        });
        let (kitchen, payment_methods) = state.resolve(payload.kitchen_id, &payment_method_ids)?;

        let restaurant = Restaurant {
            id,
            name: payload.name,
            delivery_fee: payload.delivery_fee,
            kitchen,
            payment_methods,
            address: payload.address,
            created_at: current.created_at,
            updated_at: Some(chrono::Utc::now().naive_utc()),
        };
        state.restaurants.insert(id, restaurant.clone());

        Ok(restaurant)
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), Error> {
        let mut state = self.state.lock().unwrap();
        if !state.restaurants.contains_key(&id) {
            return Err(Error::NotFound);
        }
        if state.in_use.contains(&id) {
            return Err(Error::InUse);
        }
        state.restaurants.remove(&id);

        Ok(())
    }
}

pub fn build_test_app(store: Arc<InMemoryStore>) -> Router {
    let ctx = Context {
        app: AppContext {
            host: "127.0.0.1".to_string(),
            port: 0,
            url: "http://127.0.0.1:0".to_string(),
        },
        restaurants: store.clone(),
        kitchens: store.clone(),
        payment_methods: store,
    };

    App::new(Arc::new(ctx)).router()
}

pub async fn send(app: Router, method: Method, uri: &str, body: Option<Value>) -> Response<Body> {
    let request = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => request
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string())),
        None => request.body(Body::empty()),
    }
    .unwrap();

    app.oneshot(request).await.unwrap()
}

/// Sends `body` verbatim as `application/json`, for payloads `Value` cannot hold.
pub async fn send_raw(app: Router, method: Method, uri: &str, body: &str) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None).await
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

pub async fn body_json(response: Response<Body>) -> Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

pub fn decimal(value: &Value) -> BigDecimal {
    match value {
        Value::String(raw) => BigDecimal::from_str(raw).unwrap(),
        other => BigDecimal::from_str(&other.to_string()).unwrap(),
    }
}
