/// Townships, boroughs and postal place names inside Montgomery County, PA.
pub(crate) const MONTGOMERY_COUNTY_PA: &[&str] = &[
    // Boroughs
    "AMBLER",
    "BRIDGEPORT",
    "BRYN ATHYN",
    "COLLEGEVILLE",
    "CONSHOHOCKEN",
    "EAST GREENVILLE",
    "GREEN LANE",
    "HATBORO",
    "HATFIELD",
    "JENKINTOWN",
    "LANSDALE",
    "NARBERTH",
    "NORRISTOWN",
    "NORTH WALES",
    "PENNSBURG",
    "POTTSTOWN",
    "RED HILL",
    "ROCKLEDGE",
    "ROYERSFORD",
    "SCHWENKSVILLE",
    "SOUDERTON",
    "TELFORD",
    "TRAPPE",
    "WEST CONSHOHOCKEN",
    // Townships
    "ABINGTON",
    "CHELTENHAM",
    "DOUGLASS",
    "EAST NORRITON",
    "FRANCONIA",
    "HORSHAM",
    "LIMERICK",
    "LOWER FREDERICK",
    "LOWER GWYNEDD",
    "LOWER MERION",
    "LOWER MORELAND",
    "LOWER POTTSGROVE",
    "LOWER PROVIDENCE",
    "LOWER SALFORD",
    "MARLBOROUGH",
    "MONTGOMERY",
    "NEW HANOVER",
    "PERKIOMEN",
    "PLYMOUTH",
    "SALFORD",
    "SKIPPACK",
    "SPRINGFIELD",
    "TOWAMENCIN",
    "UPPER DUBLIN",
    "UPPER FREDERICK",
    "UPPER GWYNEDD",
    "UPPER HANOVER",
    "UPPER MERION",
    "UPPER MORELAND",
    "UPPER POTTSGROVE",
    "UPPER PROVIDENCE",
    "UPPER SALFORD",
    "WEST NORRITON",
    "WEST POTTSGROVE",
    "WHITEMARSH",
    "WHITPAIN",
    "WORCESTER",
    // Postal places
    "ARDMORE",
    "AUDUBON",
    "BALA CYNWYD",
    "BLUE BELL",
    "BRYN MAWR",
    "COLMAR",
    "DRESHER",
    "EAGLEVILLE",
    "ELKINS PARK",
    "FLOURTOWN",
    "FORT WASHINGTON",
    "GILBERTSVILLE",
    "GLADWYNE",
    "GLENSIDE",
    "GWYNEDD VALLEY",
    "HARLEYSVILLE",
    "HUNTINGDON VALLEY",
    "KING OF PRUSSIA",
    "KULPSVILLE",
    "LAFAYETTE HILL",
    "MAPLE GLEN",
    "MERION",
    "MERION STATION",
    "MONTGOMERYVILLE",
    "OAKS",
    "ORELAND",
    "PENN VALLEY",
    "PLYMOUTH MEETING",
    "SPRING HOUSE",
    "SUMNEYTOWN",
    "WILLOW GROVE",
    "WYNCOTE",
    "WYNDMOOR",
    "WYNNEWOOD",
    "ZIEGLERVILLE",
];
