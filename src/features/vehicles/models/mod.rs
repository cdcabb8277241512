mod vehicle;
mod vehicle_company;

pub use vehicle::{Vehicle, VehicleFee, VehicleKind, VehicleType};
pub use vehicle_company::{CompanyType, VehicleAccount, VehicleCompany, VehicleCompanyContact};
