//! Purchase authorization operations.

use std::sync::Arc;

use http::{HeaderMap, Method};
use paylater::{AuthorizePurchaseRequest, PurchaseOperationResponse};

use crate::auth::Credentials;
use crate::communicator::Communicator;
use crate::connection::{Connection, HttpConnection};
use crate::error::PayLaterError;
use crate::marshaller::{JsonMarshaller, Marshaller};

/// Operations that hand a purchase over to the consumer-facing
/// authorization flow.
#[derive(Debug)]
pub struct PurchaseAuthorizationApi<C = HttpConnection, M = JsonMarshaller> {
    communicator: Arc<Communicator<C, M>>,
}

impl<C, M> PurchaseAuthorizationApi<C, M>
where
    C: Connection,
    M: Marshaller,
{
    /// Creates the API surface over a shared communicator.
    pub fn new(communicator: Arc<Communicator<C, M>>) -> Self {
        Self { communicator }
    }

    /// Starts the authorization of an initialized purchase.
    ///
    /// The consumer completes the application on the self-service URL
    /// reported in the response metadata
    /// (`INSTORE_SELFSERVICE_AUTH_URL`).
    ///
    /// # Errors
    ///
    /// Any [`PayLaterError`] kind raised by the exchange.
    pub async fn authorize_pay_later(
        &self,
        request: &AuthorizePurchaseRequest,
        credentials: &Credentials,
    ) -> Result<PurchaseOperationResponse, PayLaterError> {
        let mut headers = HeaderMap::new();
        credentials.apply(&mut headers);
        self.communicator
            .execute(
                Method::POST,
                "/purchase/authorization/paylater",
                headers,
                Some(request),
            )
            .await
    }
}
