use std::convert::TryFrom;

use super::reservation as pb;
use crate::{
    format_date, non_empty, parse_date, parse_decimal, Address, Availability, Client, Error,
    Property, PropertyFilter, Reservation, ReservationFilter, ReservationRequest,
    DEFAULT_COUNTRY, DEFAULT_PAGE_SIZE,
};

impl From<Address> for pb::Address {
    fn from(a: Address) -> Self {
        Self {
            street: a.street,
            number: a.number,
            neighborhood: a.neighborhood,
            city: a.city,
            state: a.state,
            country: a.country,
        }
    }
}

impl From<pb::Address> for Address {
    fn from(a: pb::Address) -> Self {
        let country = non_empty(a.country).unwrap_or_else(|| DEFAULT_COUNTRY.to_string());
        Address::new(a.street, a.number, a.neighborhood, a.city, a.state, country)
    }
}

impl From<Property> for pb::Property {
    fn from(p: Property) -> Self {
        Self {
            id: p.id,
            name: p.name,
            rooms: p.rooms,
            capacity: p.capacity,
            nightly_price: p.nightly_price.to_string(),
            address: Some(p.address.into()),
        }
    }
}

impl TryFrom<pb::Property> for Property {
    type Error = Error;

    fn try_from(p: pb::Property) -> Result<Self, Self::Error> {
        let address = p
            .address
            .ok_or_else(|| Error::InvalidArgument("property address is required".into()))?;
        let mut property = Property::new(
            p.name,
            p.rooms,
            p.capacity,
            parse_decimal("nightly_price", &p.nightly_price)?,
            address.into(),
        );
        property.id = p.id;
        Ok(property)
    }
}

impl From<Client> for pb::Client {
    fn from(c: Client) -> Self {
        Self {
            id: c.id,
            name: c.name,
            email: c.email,
        }
    }
}

impl From<Reservation> for pb::Reservation {
    fn from(r: Reservation) -> Self {
        Self {
            id: r.id,
            property_id: r.property_id,
            client_id: r.client_id,
            start: format_date(r.start),
            end: format_date(r.end),
            occupants: r.occupants,
            total_price: r.total_price.to_string(),
            active: r.active,
        }
    }
}

impl TryFrom<pb::ReserveRequest> for ReservationRequest {
    type Error = Error;

    fn try_from(req: pb::ReserveRequest) -> Result<Self, Self::Error> {
        Ok(ReservationRequest::new(
            req.client_id,
            req.property_id,
            parse_date("start", &req.start)?,
            parse_date("end", &req.end)?,
            req.occupants,
        ))
    }
}

impl TryFrom<pb::AvailabilityRequest> for ReservationRequest {
    type Error = Error;

    fn try_from(req: pb::AvailabilityRequest) -> Result<Self, Self::Error> {
        Ok(ReservationRequest::new(
            0,
            req.property_id,
            parse_date("start", &req.start)?,
            parse_date("end", &req.end)?,
            req.occupants,
        ))
    }
}

impl From<Availability> for pb::AvailabilityResponse {
    fn from(a: Availability) -> Self {
        Self {
            property_id: a.property_id,
            available: a.is_available(),
            message: a.to_string(),
            conflicts: a.conflicts.into_iter().map(Into::into).collect(),
        }
    }
}

// proto3 has no optional scalars: zero means "first page" / "default size"
fn paging(page: i64, page_size: i64) -> (i64, i64) {
    let page = if page == 0 { 1 } else { page };
    let page_size = if page_size == 0 {
        DEFAULT_PAGE_SIZE
    } else {
        page_size
    };
    (page, page_size)
}

impl From<pb::ReservationQuery> for ReservationFilter {
    fn from(q: pb::ReservationQuery) -> Self {
        let (page, page_size) = paging(q.page, q.page_size);
        Self {
            property_id: (q.property_id != 0).then(|| q.property_id),
            client_id: None,
            client_email: non_empty(q.client_email),
            include_cancelled: q.include_cancelled,
            page,
            page_size,
        }
    }
}

impl TryFrom<pb::PropertyQuery> for PropertyFilter {
    type Error = Error;

    fn try_from(q: pb::PropertyQuery) -> Result<Self, Self::Error> {
        let (page, page_size) = paging(q.page, q.page_size);
        let max_price = match non_empty(q.max_price) {
            Some(p) => Some(parse_decimal("max_price", &p)?),
            None => None,
        };
        Ok(Self {
            city: non_empty(q.city),
            state: non_empty(q.state),
            neighborhood: non_empty(q.neighborhood),
            max_capacity: (q.max_capacity != 0).then(|| q.max_capacity),
            max_price,
            page,
            page_size,
        })
    }
}

impl pb::ReserveRequest {
    pub fn new(
        client_id: i64,
        property_id: i64,
        start: impl Into<String>,
        end: impl Into<String>,
        occupants: i32,
    ) -> Self {
        Self {
            client_id,
            property_id,
            start: start.into(),
            end: end.into(),
            occupants,
        }
    }
}

impl pb::CancelRequest {
    pub fn new(id: i64) -> Self {
        Self { id }
    }
}

impl pb::GetRequest {
    pub fn new(id: i64) -> Self {
        Self { id }
    }
}

impl pb::QueryRequest {
    pub fn new(query: pb::ReservationQuery) -> Self {
        Self { query: Some(query) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn property_should_convert_from_wire() {
        let wire = pb::Property {
            id: 0,
            name: "Chalet".into(),
            rooms: 3,
            capacity: 6,
            nightly_price: "100.00".into(),
            address: Some(pb::Address {
                street: "Rua B".into(),
                number: "7".into(),
                neighborhood: "Lagoa".into(),
                city: "Florianópolis".into(),
                state: "SC".into(),
                country: String::new(),
            }),
        };
        let property = Property::try_from(wire).unwrap();
        assert_eq!(property.nightly_price, Decimal::new(10000, 2));
        assert_eq!(property.address.country, DEFAULT_COUNTRY);
    }

    #[test]
    fn property_without_address_should_be_rejected() {
        let wire = pb::Property {
            nightly_price: "1".into(),
            ..Default::default()
        };
        assert!(matches!(
            Property::try_from(wire),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn reserve_request_with_bad_date_should_be_rejected() {
        let req = pb::ReserveRequest::new(1, 1, "2024-13-01", "2024-12-05", 2);
        assert!(ReservationRequest::try_from(req).is_err());
    }

    #[test]
    fn empty_query_should_mean_active_first_page() {
        let filter: ReservationFilter = pb::ReservationQuery::default().into();
        assert_eq!(filter, ReservationFilter::default());
    }
}
