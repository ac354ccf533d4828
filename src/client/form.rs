use clap::ValueEnum;

// The raw form selections, before one-hot expansion. The `label` strings are
// the exact category spellings the model was trained with, so they feed
// straight into the feature key names.

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Color {
    Black,
    Blue,
    Brown,
    CarnelianRed,
    Golden,
    Green,
    Grey,
    Orange,
    Pink,
    Purple,
    Red,
    Silver,
    SkyBlue,
    White,
    Yellow,
}

impl Color {
    pub const ALL: [Color; 15] = [
        Color::Black,
        Color::Blue,
        Color::Brown,
        Color::CarnelianRed,
        Color::Golden,
        Color::Green,
        Color::Grey,
        Color::Orange,
        Color::Pink,
        Color::Purple,
        Color::Red,
        Color::Silver,
        Color::SkyBlue,
        Color::White,
        Color::Yellow,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Color::Black => "Black",
            Color::Blue => "Blue",
            Color::Brown => "Brown",
            Color::CarnelianRed => "Carnelian red",
            Color::Golden => "Golden",
            Color::Green => "Green",
            Color::Grey => "Grey",
            Color::Orange => "Orange",
            Color::Pink => "Pink",
            Color::Purple => "Purple",
            Color::Red => "Red",
            Color::Silver => "Silver",
            Color::SkyBlue => "Sky blue",
            Color::White => "White",
            Color::Yellow => "Yellow",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Category {
    Coupe,
    GoodsWagon,
    Hatchback,
    Jeep,
    Limousine,
    Microbus,
    Minivan,
    Pickup,
    Sedan,
    Universal,
}

impl Category {
    pub const ALL: [Category; 10] = [
        Category::Coupe,
        Category::GoodsWagon,
        Category::Hatchback,
        Category::Jeep,
        Category::Limousine,
        Category::Microbus,
        Category::Minivan,
        Category::Pickup,
        Category::Sedan,
        Category::Universal,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Coupe => "Coupe",
            Category::GoodsWagon => "Goods wagon",
            Category::Hatchback => "Hatchback",
            Category::Jeep => "Jeep",
            Category::Limousine => "Limousine",
            Category::Microbus => "Microbus",
            Category::Minivan => "Minivan",
            Category::Pickup => "Pickup",
            Category::Sedan => "Sedan",
            Category::Universal => "Universal",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DriveWheels {
    #[value(name = "4wd")]
    FourWheelDrive,
    #[value(name = "fwd")]
    FrontWheelDrive,
    #[value(name = "rwd")]
    RearWheelDrive,
}

impl DriveWheels {
    pub const ALL: [DriveWheels; 3] = [
        DriveWheels::FourWheelDrive,
        DriveWheels::FrontWheelDrive,
        DriveWheels::RearWheelDrive,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            DriveWheels::FourWheelDrive => "4WD",
            DriveWheels::FrontWheelDrive => "FWD",
            DriveWheels::RearWheelDrive => "RWD",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum GearboxType {
    Automatic,
    Manual,
    Tiptronic,
    Variator,
}

impl GearboxType {
    pub const ALL: [GearboxType; 4] = [
        GearboxType::Automatic,
        GearboxType::Manual,
        GearboxType::Tiptronic,
        GearboxType::Variator,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            GearboxType::Automatic => "Automatic",
            GearboxType::Manual => "Manual",
            GearboxType::Tiptronic => "Tiptronic",
            GearboxType::Variator => "Variator",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FuelType {
    Diesel,
    Hybrid,
    Hydrogen,
    Lpg,
    Petrol,
    PluginHybrid,
}

impl FuelType {
    pub const ALL: [FuelType; 6] = [
        FuelType::Diesel,
        FuelType::Hybrid,
        FuelType::Hydrogen,
        FuelType::Lpg,
        FuelType::Petrol,
        FuelType::PluginHybrid,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FuelType::Diesel => "Diesel",
            FuelType::Hybrid => "Hybrid",
            FuelType::Hydrogen => "Hydrogen",
            FuelType::Lpg => "LPG",
            FuelType::Petrol => "Petrol",
            FuelType::PluginHybrid => "Plug-in Hybrid",
        }
    }
}

/// One complete set of form selections. Numeric bounds follow the form
/// controls: year 1950-2026, airbags 0-16, engine volume 0.0-10.0 L,
/// cylinders 1-16, mileage 0-1,000,000.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarForm {
    pub year: u32,
    pub leather_interior: bool,
    /// true = left wheel, false = right-hand drive
    pub left_wheel: bool,
    pub airbags: u32,
    pub color: Color,
    pub category: Category,
    pub engine_volume: f64,
    pub cylinders: u32,
    pub turbo: bool,
    pub drive_wheels: DriveWheels,
    pub gearbox: GearboxType,
    pub mileage: u64,
    pub fuel: FuelType,
}
