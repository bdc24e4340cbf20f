//! Purchase lifecycle operations: initialize, query, capture, refund.

use std::sync::Arc;

use http::{HeaderMap, Method};
use paylater::{
    CapturePurchaseRequest, InitializePurchaseRequest, PurchaseOperationResponse,
    RefundPurchaseRequest,
};

use super::populate_uri;
use crate::auth::Credentials;
use crate::communicator::{Communicator, ResponseWithAuthorization};
use crate::connection::{Connection, HttpConnection};
use crate::error::PayLaterError;
use crate::marshaller::{JsonMarshaller, Marshaller};

/// Operations that progress a purchase through its lifecycle.
///
/// Every endpoint returns the same [`PurchaseOperationResponse`] with the
/// latest state of the purchase and different fields populated.
#[derive(Debug)]
pub struct PurchaseLifecycleApi<C = HttpConnection, M = JsonMarshaller> {
    communicator: Arc<Communicator<C, M>>,
}

impl<C, M> PurchaseLifecycleApi<C, M>
where
    C: Connection,
    M: Marshaller,
{
    /// Creates the API surface over a shared communicator.
    pub fn new(communicator: Arc<Communicator<C, M>>) -> Self {
        Self { communicator }
    }

    /// Initializes a purchase for a given amount and returns all
    /// pre-configured, non-binding payment options.
    ///
    /// The paired result also carries the single-purchase authorization
    /// token minted in the `access_token` response header, which
    /// client-side callers use for their subsequent calls.
    ///
    /// # Errors
    ///
    /// Any [`PayLaterError`] kind raised by the exchange.
    pub async fn initialize_purchase(
        &self,
        request: &InitializePurchaseRequest,
        credentials: &Credentials,
    ) -> Result<ResponseWithAuthorization<PurchaseOperationResponse>, PayLaterError> {
        let mut headers = HeaderMap::new();
        credentials.apply(&mut headers);
        self.communicator
            .execute_with_authorization_header(
                Method::POST,
                "/purchase/initialize",
                headers,
                Some(request),
            )
            .await
    }

    /// Queries the purchase with the given identifier.
    ///
    /// # Errors
    ///
    /// Any [`PayLaterError`] kind raised by the exchange.
    pub async fn get_purchase(
        &self,
        purchase_id: &str,
        credentials: &Credentials,
    ) -> Result<PurchaseOperationResponse, PayLaterError> {
        let uri = populate_uri("/purchase/info/{purchaseId}", &[("purchaseId", purchase_id)]);
        let mut headers = HeaderMap::new();
        credentials.apply(&mut headers);
        self.communicator
            .execute::<(), _>(Method::GET, &uri, headers, None)
            .await
    }

    /// Confirms a capture (= shipping) of the purchased goods.
    ///
    /// # Errors
    ///
    /// Any [`PayLaterError`] kind raised by the exchange.
    pub async fn capture_purchase(
        &self,
        request: &CapturePurchaseRequest,
        credentials: &Credentials,
    ) -> Result<PurchaseOperationResponse, PayLaterError> {
        let mut headers = HeaderMap::new();
        credentials.apply(&mut headers);
        self.communicator
            .execute(Method::POST, "/purchase/capture", headers, Some(request))
            .await
    }

    /// Refunds part of or the full captured amount after the consumer
    /// returned purchased goods.
    ///
    /// # Errors
    ///
    /// Any [`PayLaterError`] kind raised by the exchange.
    pub async fn refund_purchase(
        &self,
        request: &RefundPurchaseRequest,
        credentials: &Credentials,
    ) -> Result<PurchaseOperationResponse, PayLaterError> {
        let mut headers = HeaderMap::new();
        credentials.apply(&mut headers);
        self.communicator
            .execute(Method::POST, "/purchase/refund", headers, Some(request))
            .await
    }
}
