use std::convert::TryFrom;

use abi::{
    pb::{
        reservation_service_server::ReservationService, AvailabilityRequest,
        AvailabilityResponse, CancelRequest, CancelResponse, ClientResponse,
        CreatePropertyRequest, GetClientRequest, GetPropertyRequest, GetRequest, GetResponse,
        ListPropertiesRequest, ListPropertiesResponse, PropertyResponse, QueryRequest,
        QueryResponse, RegisterClientRequest, ReserveRequest, ReserveResponse,
    },
    Error, Property, PropertyFilter, ReservationFilter, ReservationRequest,
};
use reservation::{Catalog, Rsvp, Store};
use tonic::{async_trait, Request, Response, Status};

use crate::RsvpService;

#[async_trait]
impl<S: Store> ReservationService for RsvpService<S> {
    async fn reserve(
        &self,
        request: Request<ReserveRequest>,
    ) -> Result<Response<ReserveResponse>, Status> {
        let req = ReservationRequest::try_from(request.into_inner())?;
        let rsvp = self.manager.reserve(req).await?;
        Ok(Response::new(ReserveResponse {
            reservation: Some(rsvp.into()),
        }))
    }

    async fn cancel(
        &self,
        request: Request<CancelRequest>,
    ) -> Result<Response<CancelResponse>, Status> {
        let rsvp = self.manager.cancel(request.into_inner().id).await?;
        Ok(Response::new(CancelResponse {
            reservation: Some(rsvp.into()),
        }))
    }

    async fn get(&self, request: Request<GetRequest>) -> Result<Response<GetResponse>, Status> {
        let rsvp = self.manager.get(request.into_inner().id).await?;
        Ok(Response::new(GetResponse {
            reservation: Some(rsvp.into()),
        }))
    }

    async fn query(
        &self,
        request: Request<QueryRequest>,
    ) -> Result<Response<QueryResponse>, Status> {
        let filter = request
            .into_inner()
            .query
            .map(ReservationFilter::from)
            .unwrap_or_default();
        let rsvps = self.manager.query(filter).await?;
        Ok(Response::new(QueryResponse {
            reservations: rsvps.into_iter().map(Into::into).collect(),
        }))
    }

    async fn availability(
        &self,
        request: Request<AvailabilityRequest>,
    ) -> Result<Response<AvailabilityResponse>, Status> {
        let req = ReservationRequest::try_from(request.into_inner())?;
        let availability = self.manager.check_availability(req).await?;
        Ok(Response::new(availability.into()))
    }

    async fn create_property(
        &self,
        request: Request<CreatePropertyRequest>,
    ) -> Result<Response<PropertyResponse>, Status> {
        let property = request
            .into_inner()
            .property
            .ok_or_else(|| Error::InvalidArgument("property is required".into()))?;
        let property = self
            .manager
            .create_property(Property::try_from(property)?)
            .await?;
        Ok(Response::new(PropertyResponse {
            property: Some(property.into()),
        }))
    }

    async fn get_property(
        &self,
        request: Request<GetPropertyRequest>,
    ) -> Result<Response<PropertyResponse>, Status> {
        let property = self.manager.get_property(request.into_inner().id).await?;
        Ok(Response::new(PropertyResponse {
            property: Some(property.into()),
        }))
    }

    async fn list_properties(
        &self,
        request: Request<ListPropertiesRequest>,
    ) -> Result<Response<ListPropertiesResponse>, Status> {
        let filter = match request.into_inner().query {
            Some(query) => PropertyFilter::try_from(query)?,
            None => PropertyFilter::default(),
        };
        let properties = self.manager.list_properties(filter).await?;
        Ok(Response::new(ListPropertiesResponse {
            properties: properties.into_iter().map(Into::into).collect(),
        }))
    }

    async fn register_client(
        &self,
        request: Request<RegisterClientRequest>,
    ) -> Result<Response<ClientResponse>, Status> {
        let RegisterClientRequest { name, email } = request.into_inner();
        let client = self.manager.register_client(name, email).await?;
        Ok(Response::new(ClientResponse {
            client: Some(client.into()),
        }))
    }

    async fn get_client(
        &self,
        request: Request<GetClientRequest>,
    ) -> Result<Response<ClientResponse>, Status> {
        let client = self.manager.get_client(request.into_inner().id).await?;
        Ok(Response::new(ClientResponse {
            client: Some(client.into()),
        }))
    }
}
