pub mod error;
mod error_mapper;
pub mod pagination;
pub mod tags;

pub mod health {
    pub mod routes;
}
pub mod category {
    pub mod dto;
    pub mod routes;
}
pub mod product {
    pub mod dto;
    pub mod routes;
}
pub mod user {
    pub mod dto;
    pub mod routes;
}

#[cfg(test)]
mod test_support;
