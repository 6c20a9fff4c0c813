//! Listings currently on the site.

use rust_decimal_macros::dec;
use safal_shared::types::{PropertyId, Rupees};

use super::types::{Property, TenantType};

const IMG_TOWER: &str = "https://images.unsplash.com/photo-1486406146926-c627a92ad1ab?w=1200&q=80";
const IMG_OFFICE: &str = "https://images.unsplash.com/photo-1497366216548-37526070297c?w=1200&q=80";
const IMG_LOBBY: &str = "https://images.unsplash.com/photo-1497366811353-6870744d04b2?w=1200&q=80";
const IMG_FACADE: &str = "https://images.unsplash.com/photo-1486718448742-163732cd1544?w=1200&q=80";
const IMG_RETAIL: &str = "https://images.unsplash.com/photo-1582407947304-fd86f028f716?w=1200&q=80";
const IMG_COMPLEX: &str = "https://images.unsplash.com/photo-1545324418-cc1a3fa10c00?w=1200&q=80";
const IMG_PARK: &str = "https://images.unsplash.com/photo-1460317442991-0ec209397118?w=1200&q=80";

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(ToString::to_string).collect()
}

/// Returns every listing, in display order.
#[must_use]
#[allow(clippy::too_many_lines)]
pub fn properties() -> Vec<Property> {
    vec![
        Property {
            id: PropertyId::from("1"),
            name: "Premium Bank Leased Property".into(),
            location: "Andheri West, Mumbai".into(),
            full_address: "Plot 45, Commercial Complex, Andheri West, Mumbai - 400058".into(),
            tenant: "HDFC Bank".into(),
            tenant_type: TenantType::Bank,
            carpet_area_sqft: 3_500,
            built_up_area_sqft: 4_200,
            lease_start_year: 2020,
            lease_end_year: 2032,
            monthly_rent: Rupees::from_whole(280_000),
            annual_escalation_percent: dec!(5),
            roi: dec!(8.2),
            price: Rupees::from_whole(41_000_000),
            security_deposit_months: 12,
            lock_in_years: 5,
            images: strings(&[IMG_TOWER, IMG_OFFICE, IMG_LOBBY, IMG_FACADE]),
            description: "Premium ground floor commercial space leased to HDFC Bank in one of \
                Mumbai's most sought-after commercial districts. This property offers excellent \
                visibility, high footfall, and stable long-term returns backed by India's leading \
                private sector bank."
                .into(),
            highlights: strings(&[
                "Prime corner location with excellent visibility",
                "Triple A tenant with strong credit rating",
                "Long lease tenure with 5% annual escalation",
                "Well-maintained property with modern amenities",
                "High rental yield compared to market average",
                "Easy exit with strong investor demand",
            ]),
            amenities: strings(&[
                "24/7 Security",
                "Power Backup",
                "Parking Space",
                "Fire Safety",
                "CCTV Surveillance",
                "Elevator Access",
            ]),
        },
        Property {
            id: PropertyId::from("2"),
            name: "Corporate Office Space".into(),
            location: "Whitefield, Bangalore".into(),
            full_address: "Tower B, Tech Park, Whitefield Main Road, Bangalore - 560066".into(),
            tenant: "Infosys Ltd".into(),
            tenant_type: TenantType::It,
            carpet_area_sqft: 5_200,
            built_up_area_sqft: 6_100,
            lease_start_year: 2021,
            lease_end_year: 2030,
            monthly_rent: Rupees::from_whole(390_000),
            annual_escalation_percent: dec!(5),
            roi: dec!(7.8),
            price: Rupees::from_whole(60_000_000),
            security_deposit_months: 10,
            lock_in_years: 3,
            images: strings(&[IMG_OFFICE, IMG_LOBBY, IMG_TOWER, IMG_FACADE]),
            description: "Modern office space in Bangalore's premier IT corridor, leased to \
                Infosys - one of India's largest IT companies. The property is located in a Grade \
                A tech park with world-class amenities and excellent connectivity."
                .into(),
            highlights: strings(&[
                "Located in Grade A tech park",
                "Marquee IT tenant with global presence",
                "Excellent metro and road connectivity",
                "Modern infrastructure and amenities",
                "Strong appreciation potential",
                "Consistent rental track record",
            ]),
            amenities: strings(&[
                "24/7 Security",
                "Power Backup",
                "Cafeteria",
                "Gym & Recreation",
                "Conference Rooms",
                "High-speed Internet",
            ]),
        },
        Property {
            id: PropertyId::from("3"),
            name: "Retail Showroom".into(),
            location: "MG Road, Pune".into(),
            full_address: "Shop 2, Ground Floor, MG Road, Camp, Pune - 411001".into(),
            tenant: "Reliance Retail".into(),
            tenant_type: TenantType::Retail,
            carpet_area_sqft: 4_000,
            built_up_area_sqft: 4_700,
            lease_start_year: 2021,
            lease_end_year: 2033,
            monthly_rent: Rupees::from_whole(320_000),
            annual_escalation_percent: dec!(5),
            roi: dec!(8.5),
            price: Rupees::from_whole(45_000_000),
            security_deposit_months: 9,
            lock_in_years: 5,
            images: strings(&[IMG_RETAIL, IMG_FACADE, IMG_TOWER]),
            description: "High-street retail showroom on Pune's MG Road leased to Reliance \
                Retail, with double-height frontage and steady walk-in traffic."
                .into(),
            highlights: strings(&[
                "High-street frontage on MG Road",
                "National retail brand as tenant",
                "Nine years of lease remaining",
            ]),
            amenities: strings(&["24/7 Security", "Power Backup", "Parking Space"]),
        },
        Property {
            id: PropertyId::from("4"),
            name: "Commercial Complex Unit".into(),
            location: "Gurgaon, Delhi NCR".into(),
            full_address: "Unit 104, Sector 44 Commercial Complex, Gurgaon - 122003".into(),
            tenant: "Axis Bank".into(),
            tenant_type: TenantType::Bank,
            carpet_area_sqft: 2_800,
            built_up_area_sqft: 3_300,
            lease_start_year: 2019,
            lease_end_year: 2031,
            monthly_rent: Rupees::from_whole(224_000),
            annual_escalation_percent: dec!(5),
            roi: dec!(7.9),
            price: Rupees::from_whole(34_000_000),
            security_deposit_months: 12,
            lock_in_years: 5,
            images: strings(&[IMG_COMPLEX, IMG_OFFICE, IMG_FACADE]),
            description: "Ground floor unit in an established Gurgaon commercial complex, \
                leased to Axis Bank as a full-service branch."
                .into(),
            highlights: strings(&[
                "Scheduled bank as tenant",
                "Established commercial catchment",
                "Metro station within walking distance",
            ]),
            amenities: strings(&["24/7 Security", "Power Backup", "Fire Safety"]),
        },
        Property {
            id: PropertyId::from("5"),
            name: "IT Park Office Space".into(),
            location: "HITEC City, Hyderabad".into(),
            full_address: "Floor 6, Cyber Towers Annexe, HITEC City, Hyderabad - 500081".into(),
            tenant: "TCS".into(),
            tenant_type: TenantType::It,
            carpet_area_sqft: 6_500,
            built_up_area_sqft: 7_600,
            lease_start_year: 2020,
            lease_end_year: 2029,
            monthly_rent: Rupees::from_whole(455_000),
            annual_escalation_percent: dec!(5),
            roi: dec!(8.0),
            price: Rupees::from_whole(68_000_000),
            security_deposit_months: 10,
            lock_in_years: 3,
            images: strings(&[IMG_PARK, IMG_OFFICE, IMG_LOBBY]),
            description: "Full-floor office in HITEC City leased to Tata Consultancy Services, \
                inside a campus with shared food court and transport."
                .into(),
            highlights: strings(&[
                "Blue-chip IT tenant",
                "Full floor plate with efficient layout",
                "Campus with shared infrastructure",
            ]),
            amenities: strings(&[
                "24/7 Security",
                "Power Backup",
                "Cafeteria",
                "High-speed Internet",
            ]),
        },
        Property {
            id: PropertyId::from("6"),
            name: "Standalone Bank Branch".into(),
            location: "Koramangala, Bangalore".into(),
            full_address: "80 Feet Road, 4th Block, Koramangala, Bangalore - 560034".into(),
            tenant: "ICICI Bank".into(),
            tenant_type: TenantType::Bank,
            carpet_area_sqft: 3_200,
            built_up_area_sqft: 3_800,
            lease_start_year: 2022,
            lease_end_year: 2034,
            monthly_rent: Rupees::from_whole(288_000),
            annual_escalation_percent: dec!(5),
            roi: dec!(8.8),
            price: Rupees::from_whole(39_000_000),
            security_deposit_months: 12,
            lock_in_years: 5,
            images: strings(&[IMG_FACADE, IMG_TOWER, IMG_OFFICE]),
            description: "Standalone building on Koramangala's 80 Feet Road occupied by an \
                ICICI Bank branch, with dedicated parking and ATM lobby."
                .into(),
            highlights: strings(&[
                "Standalone building with road frontage",
                "Ten years of lease remaining",
                "Highest yield in the current portfolio",
            ]),
            amenities: strings(&["24/7 Security", "Parking Space", "CCTV Surveillance"]),
        },
    ]
}
