//! Articles currently published on the site.

use chrono::NaiveDate;
use safal_shared::types::PostSlug;

use super::content::parse_body;
use super::types::BlogPost;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

struct Draft<'a> {
    slug: &'a str,
    title: &'a str,
    excerpt: &'a str,
    category: &'a str,
    author: &'a str,
    author_role: &'a str,
    published_on: NaiveDate,
    read_minutes: u32,
    image: &'a str,
    featured: bool,
    body: &'a [&'a str],
}

impl Draft<'_> {
    fn publish(&self) -> BlogPost {
        BlogPost {
            slug: PostSlug::from(self.slug),
            title: self.title.to_string(),
            excerpt: self.excerpt.to_string(),
            category: self.category.to_string(),
            author: self.author.to_string(),
            author_role: self.author_role.to_string(),
            published_on: self.published_on,
            read_minutes: self.read_minutes,
            image: self.image.to_string(),
            featured: self.featured,
            content: parse_body(self.body),
        }
    }
}

const PRE_LEASED_BODY: &[&str] = &[
    "Pre-leased property, also known as pre-rented property, is a commercial real estate asset that comes with an existing tenant and an active lease agreement. This means that from the day of purchase, you start earning rental income without the hassle of finding tenants.",
    "## Why Invest in Pre-Leased Properties?",
    "The primary advantage of pre-leased properties is the elimination of vacancy risk. Traditional commercial properties may sit empty for months while you search for suitable tenants. With pre-leased properties, rental income begins immediately upon purchase.",
    "### Key Benefits:",
    "**1. Assured Rental Income**: The property comes with a signed lease agreement, typically ranging from 5 to 15 years, guaranteeing steady monthly income.",
    "**2. Lower Risk**: Having a reputed tenant like a bank or IT company significantly reduces investment risk. These tenants have strong credit ratings and rarely default on payments.",
    "**3. Annual Escalation**: Most lease agreements include an annual rental escalation clause (typically 5%), ensuring your income grows over time.",
    "**4. Tax Benefits**: Commercial property investors can claim depreciation benefits and deduct expenses like property tax, maintenance, and loan interest.",
    "## Types of Pre-Leased Properties",
    "**Bank-Leased Properties**: These are considered the safest as banks are highly reliable tenants with excellent credit ratings. HDFC, ICICI, and Axis Bank are common tenants.",
    "**IT/Corporate Office Spaces**: Properties leased to IT giants like Infosys, TCS, or Wipro offer good returns and long-term stability.",
    "**Retail Spaces**: Shopping centers and standalone retail properties leased to brands like Reliance Retail, Big Bazaar, or D-Mart.",
    "## How to Evaluate a Pre-Leased Property",
    "Before investing, consider these crucial factors:",
    "- **Tenant Quality**: Research the tenant's financial health and track record.",
    "- **Lease Terms**: Check the remaining lease period, lock-in clause, and escalation terms.",
    "- **Location**: Properties in prime commercial areas command better rentals and appreciation.",
    "- **ROI Analysis**: Calculate the gross and net yield to ensure attractive returns.",
    "## Conclusion",
    "Pre-leased commercial properties offer a compelling investment opportunity for those seeking stable, passive income. With the right due diligence and property selection, investors can achieve returns of 7-9% annually, significantly outperforming traditional investment options like fixed deposits.",
];

const ROI_GUIDE_BODY: &[&str] = &[
    "Understanding how to calculate Return on Investment (ROI) is crucial for any commercial property investor. This guide will walk you through the key metrics and formulas used to evaluate investment performance.",
    "## Basic ROI Formula",
    "The simplest ROI calculation is: **ROI = (Annual Rental Income / Property Cost) × 100**",
    "For example, if a property costs ₹4 Crore and generates annual rent of ₹32 Lakhs: ROI = (32,00,000 / 4,00,00,000) × 100 = **8%**",
    "## Gross Rental Yield vs Net Rental Yield",
    "**Gross Rental Yield** doesn't account for expenses: Annual Rent ÷ Property Price × 100",
    "**Net Rental Yield** is more accurate as it deducts expenses: (Annual Rent - Annual Expenses) ÷ Property Price × 100",
    "### Common Expenses to Consider:",
    "- Property Tax",
    "- Maintenance and repairs",
    "- Insurance",
    "- Property management fees",
    "- Vacancy allowance",
    "## Total Return Calculation",
    "For a complete picture, consider both rental income and capital appreciation:",
    "**Total Return = Rental Yield + Capital Appreciation**",
    "If your property appreciates 5% annually and yields 8% rent, total return = 13%",
    "## Pro Tips for Better ROI",
    "1. Negotiate lower purchase prices for better yields",
    "2. Choose properties with escalation clauses",
    "3. Consider locations with high appreciation potential",
    "4. Factor in all costs including registration and brokerage",
];

const BEST_CITIES_BODY: &[&str] = &[
    "Commercial demand in India is concentrated in a handful of metros where office absorption and retail consumption keep rising year after year.",
    "## What Makes a City Investable",
    "- Sustained office absorption by IT and financial services firms",
    "- Metro and expressway connectivity to business districts",
    "- A deep pool of institutional tenants",
    "## The Shortlist",
    "**Bangalore**: The country's largest office market, anchored by Whitefield and Outer Ring Road tech parks.",
    "**Mumbai**: Bank branches and corporate offices in Andheri, BKC, and Lower Parel command premium rents.",
    "**Hyderabad**: HITEC City and Gachibowli continue to attract global capability centres.",
    "**Pune**: High-street retail and IT parks make for a balanced, mid-ticket market.",
    "**Delhi NCR**: Gurgaon's commercial complexes offer bank-leased units at accessible entry prices.",
];

const BANK_VS_RETAIL_BODY: &[&str] = &[
    "Bank-leased and retail properties are the two most common entry points into pre-leased investing, and they suit different goals.",
    "## Bank-Leased Properties",
    "Banks sign long leases, rarely default, and usually accept a 5% annual escalation. Yields are slightly lower in exchange for that stability.",
    "## Retail Properties",
    "Retail brands pay higher rents for high-street frontage but tie renewals to store performance.",
    "## Which Should You Choose?",
    "- Choose bank-leased units for predictable income",
    "- Choose retail for higher yield and appreciation upside",
];

const TAX_BENEFITS_BODY: &[&str] = &[
    "Commercial real estate comes with several deductions that lower the effective tax on rental income.",
    "## Deductions Available",
    "**Standard Deduction**: 30% of net annual value is deductible for repairs and upkeep.",
    "**Interest on Loan**: Interest paid on a loan taken to buy the property is deductible from rental income.",
    "**Municipal Taxes**: Property tax paid during the year is deducted from the gross annual value.",
    "## Capital Gains",
    "Holding the property for more than 24 months qualifies the sale for long-term capital gains treatment.",
];

const DUE_DILIGENCE_BODY: &[&str] = &[
    "A pre-leased purchase is only as safe as the paperwork behind it. Work through this checklist before signing.",
    "## Legal",
    "- Clear title and encumbrance certificate",
    "- Approved building plan and occupancy certificate",
    "- Registered lease deed with lock-in and escalation clauses",
    "## Financial",
    "- Rent receipts and TDS records for the last three years",
    "- Security deposit amount and refund terms",
    "## Physical",
    "- Site inspection for structural condition and fire compliance",
];

/// Returns every article, newest first.
#[must_use]
pub fn posts() -> Vec<BlogPost> {
    [
        Draft {
            slug: "what-is-pre-leased-property",
            title: "What is Pre-Leased Property? Complete Guide for Investors",
            excerpt: "Understand the fundamentals of pre-leased property investment, how it works, and why it's becoming the preferred choice for smart investors seeking stable returns.",
            category: "Investment Basics",
            author: "Rajiv Mehta",
            author_role: "Senior Investment Advisor",
            published_on: date(2024, 12, 10),
            read_minutes: 8,
            image: "https://images.unsplash.com/photo-1486406146926-c627a92ad1ab?w=1200&q=80",
            featured: true,
            body: PRE_LEASED_BODY,
        },
        Draft {
            slug: "roi-calculation-guide",
            title: "How to Calculate ROI on Commercial Property Investment",
            excerpt: "Learn the accurate methods to calculate return on investment for commercial properties, including rental yield, capital appreciation, and total returns.",
            category: "Financial Planning",
            author: "Priya Sharma",
            author_role: "Financial Analyst",
            published_on: date(2024, 12, 8),
            read_minutes: 6,
            image: "https://images.unsplash.com/photo-1554224155-8d04cb21cd6c?w=1200&q=80",
            featured: false,
            body: ROI_GUIDE_BODY,
        },
        Draft {
            slug: "best-cities-commercial-investment",
            title: "Top 5 Cities in India for Commercial Property Investment in 2024",
            excerpt: "Discover the best locations for commercial real estate investment in India, including emerging hotspots and established business districts.",
            category: "Market Analysis",
            author: "Amit Verma",
            author_role: "Market Research Lead",
            published_on: date(2024, 12, 5),
            read_minutes: 10,
            image: "https://images.unsplash.com/photo-1449157291145-7efd050a4d0e?w=1200&q=80",
            featured: true,
            body: BEST_CITIES_BODY,
        },
        Draft {
            slug: "bank-leased-vs-retail-properties",
            title: "Bank Leased vs Retail Properties: Which is Better Investment?",
            excerpt: "A detailed comparison of bank-leased and retail commercial properties to help you make an informed investment decision based on your goals.",
            category: "Investment Comparison",
            author: "Sunita Reddy",
            author_role: "Property Consultant",
            published_on: date(2024, 12, 1),
            read_minutes: 7,
            image: "https://images.unsplash.com/photo-1582407947304-fd86f028f716?w=1200&q=80",
            featured: false,
            body: BANK_VS_RETAIL_BODY,
        },
        Draft {
            slug: "tax-benefits-commercial-property",
            title: "Tax Benefits of Investing in Commercial Real Estate",
            excerpt: "Explore the various tax deductions and benefits available to commercial property investors in India, including depreciation and interest deductions.",
            category: "Tax Planning",
            author: "Rajiv Mehta",
            author_role: "Senior Investment Advisor",
            published_on: date(2024, 11, 28),
            read_minutes: 9,
            image: "https://images.unsplash.com/photo-1454165804606-c3d57bc86b40?w=1200&q=80",
            featured: false,
            body: TAX_BENEFITS_BODY,
        },
        Draft {
            slug: "due-diligence-checklist",
            title: "Essential Due Diligence Checklist for Pre-Leased Properties",
            excerpt: "A comprehensive checklist covering legal, financial, and physical aspects to verify before investing in any pre-leased commercial property.",
            category: "Legal & Compliance",
            author: "Priya Sharma",
            author_role: "Financial Analyst",
            published_on: date(2024, 11, 25),
            read_minutes: 12,
            image: "https://images.unsplash.com/photo-1450101499163-c8848c66ca85?w=1200&q=80",
            featured: true,
            body: DUE_DILIGENCE_BODY,
        },
    ]
    .iter()
    .map(Draft::publish)
    .collect()
}
