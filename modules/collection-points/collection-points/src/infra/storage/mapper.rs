use collection_points_sdk::{Item, Point};

use super::entity::{item, point};

impl From<item::Model> for Item {
    fn from(m: item::Model) -> Self {
        Self {
            id: m.id,
            title: m.title,
            image: m.image,
        }
    }
}

impl From<point::Model> for Point {
    fn from(m: point::Model) -> Self {
        Self {
            id: m.id,
            name: m.name,
            email: m.email,
            whatsapp: m.whatsapp,
            image: m.image,
            latitude: m.latitude,
            longitude: m.longitude,
            city: m.city,
            uf: m.uf,
            number: m.number,
        }
    }
}
