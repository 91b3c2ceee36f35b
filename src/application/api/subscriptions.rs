//! Subscription API

use async_trait::async_trait;

use super::client::{ApiClient, ApiResult};
use crate::application::endpoints;
use crate::application::ports::ApiRequest;
use crate::domain::{Fields, SubscriptionId};

/// 订阅资源操作
#[async_trait]
pub trait SubscriptionApi: Send + Sync {
    /// GET /subscriptions
    async fn list_subscriptions(&self) -> ApiResult;

    /// GET /subscriptions/{id}
    async fn get_subscription(&self, id: &SubscriptionId) -> ApiResult;

    /// POST /subscriptions
    async fn create_subscription(&self, fields: Fields) -> ApiResult;

    /// PUT /subscriptions/{id}
    async fn update_subscription(&self, id: &SubscriptionId, fields: Fields) -> ApiResult;

    /// DELETE /subscriptions/{id}
    async fn delete_subscription(&self, id: &SubscriptionId) -> ApiResult;

    /// POST /subscriptions/{id}/renew
    async fn renew_subscription(&self, id: &SubscriptionId) -> ApiResult;
}

#[async_trait]
impl SubscriptionApi for ApiClient {
    async fn list_subscriptions(&self) -> ApiResult {
        self.execute(ApiRequest::get(endpoints::SUBSCRIPTIONS)).await
    }

    async fn get_subscription(&self, id: &SubscriptionId) -> ApiResult {
        self.execute(ApiRequest::get(endpoints::subscription(id))).await
    }

    async fn create_subscription(&self, fields: Fields) -> ApiResult {
        self.execute(ApiRequest::post(endpoints::SUBSCRIPTIONS).with_fields(fields))
            .await
    }

    async fn update_subscription(&self, id: &SubscriptionId, fields: Fields) -> ApiResult {
        self.execute(ApiRequest::put(endpoints::subscription(id)).with_fields(fields))
            .await
    }

    async fn delete_subscription(&self, id: &SubscriptionId) -> ApiResult {
        self.execute(ApiRequest::delete(endpoints::subscription(id)))
            .await
    }

    async fn renew_subscription(&self, id: &SubscriptionId) -> ApiResult {
        self.execute(ApiRequest::post(endpoints::subscription_renew(id)))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{BillingCycle, Subscription, SubscriptionDraft, SubscriptionPatch};
    use crate::infrastructure::adapters::RecordingTransport;
    use chrono::NaiveDate;
    use http::Method;
    use serde_json::{json, Value};
    use std::sync::Arc;

    fn client() -> (Arc<RecordingTransport>, ApiClient) {
        let transport = Arc::new(RecordingTransport::new());
        (transport.clone(), ApiClient::new(transport))
    }

    #[tokio::test]
    async fn test_list_subscriptions() {
        let (transport, client) = client();
        client.list_subscriptions().await.unwrap();

        let req = transport.last_request().unwrap();
        assert_eq!(req.method, Method::GET);
        assert_eq!(req.path, "/subscriptions");
        assert_eq!(req.body, None);
    }

    #[tokio::test]
    async fn test_get_subscription_interpolates_id() {
        let (transport, client) = client();
        transport.respond(
            Method::GET,
            "/subscriptions/42",
            json!({
                "id": 42,
                "name": "Netflix",
                "price": 45.0,
                "currency": "CNY",
                "cycle": "monthly",
                "next_due_date": "2025-04-01",
                "notes": null,
                "created_at": "2025-01-01T00:00:00"
            }),
        );

        let resp = client.get_subscription(&"42".into()).await.unwrap();
        let sub: Subscription = resp.json().unwrap();
        assert_eq!(sub.id, SubscriptionId::from(42_i64));
        assert_eq!(transport.last_request().unwrap().path, "/subscriptions/42");
    }

    #[tokio::test]
    async fn test_create_subscription_sends_fields() {
        let (transport, client) = client();
        let draft = SubscriptionDraft::new(
            "Spotify",
            15.0,
            BillingCycle::Monthly,
            NaiveDate::from_ymd_opt(2025, 5, 1).unwrap(),
        );

        client.create_subscription(draft.to_fields()).await.unwrap();

        let req = transport.last_request().unwrap();
        assert_eq!(req.method, Method::POST);
        assert_eq!(req.path, "/subscriptions");
        assert_eq!(req.body, Some(Value::Object(draft.to_fields())));
    }

    #[tokio::test]
    async fn test_update_subscription() {
        let (transport, client) = client();
        let patch = SubscriptionPatch::new().price(20.0);

        client
            .update_subscription(&SubscriptionId::from(3_i64), patch.to_fields())
            .await
            .unwrap();

        let req = transport.last_request().unwrap();
        assert_eq!(req.method, Method::PUT);
        assert_eq!(req.path, "/subscriptions/3");
        assert_eq!(req.body, Some(json!({ "price": 20.0 })));
    }

    #[tokio::test]
    async fn test_delete_issues_exactly_one_request() {
        let (transport, client) = client();
        client.delete_subscription(&"9".into()).await.unwrap();

        let requests = transport.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, Method::DELETE);
        assert_eq!(requests[0].path, "/subscriptions/9");
    }

    #[tokio::test]
    async fn test_renew_has_no_body() {
        let (transport, client) = client();
        client.renew_subscription(&"5".into()).await.unwrap();

        let req = transport.last_request().unwrap();
        assert_eq!(req.method, Method::POST);
        assert_eq!(req.path, "/subscriptions/5/renew");
        assert_eq!(req.body, None);
    }
}
