use super::{Dictionary, Entry};

pub static GLOBAL: Dictionary = Dictionary::new(
    "global",
    &[
        // Navigation
        ("home", Entry::new("Trang chủ", "Home")),
        ("features", Entry::new("Tính năng", "Features")),
        ("pricing", Entry::new("Bảng giá", "Pricing")),
        ("login", Entry::new("Đăng nhập", "Login")),
        ("register", Entry::new("Đăng ký", "Register")),
        // Hero
        ("heroTitle", Entry::new("Tạo bài viết chuẩn SEO trong vài phút", "Create SEO-optimized content in minutes")),
        (
            "heroSubtitle",
            Entry::new(
                "Công cụ giúp bạn tạo nội dung chất lượng cao cho website và mạng xã hội",
                "The tool that helps you create high-quality content for websites and social media",
            ),
        ),
        ("getStarted", Entry::new("Bắt đầu ngay", "Get Started")),
        ("learnMore", Entry::new("Tìm hiểu thêm", "Learn More")),
        // Features
        ("featuresTitle", Entry::new("Tính năng nổi bật", "Key Features")),
        ("featureSEOTitle", Entry::new("Tối ưu hóa SEO", "SEO Optimization")),
        (
            "featureSEODesc",
            Entry::new(
                "Tạo bài viết được tối ưu cho công cụ tìm kiếm giúp tăng thứ hạng website",
                "Create content optimized for search engines to improve your website ranking",
            ),
        ),
        ("featureSocialTitle", Entry::new("Đăng lên mạng xã hội", "Social Media Publishing")),
        (
            "featureSocialDesc",
            Entry::new(
                "Đăng bài trực tiếp lên Facebook, TikTok, Twitter và WordPress",
                "Publish content directly to Facebook, TikTok, Twitter and WordPress",
            ),
        ),
        ("featureAITitle", Entry::new("Hỗ trợ bởi AI", "AI Powered")),
        (
            "featureAIDesc",
            Entry::new(
                "Sử dụng trí tuệ nhân tạo để tạo nội dung chất lượng cao",
                "Use artificial intelligence to create high-quality content",
            ),
        ),
        // Pricing
        ("pricingTitle", Entry::new("Bảng giá", "Pricing Plans")),
        ("monthly", Entry::new("Theo tháng", "Monthly")),
        ("yearly", Entry::new("Theo năm", "Yearly")),
        ("basicPlan", Entry::new("Cơ bản", "Basic")),
        ("proPlan", Entry::new("Chuyên nghiệp", "Professional")),
        ("enterprisePlan", Entry::new("Doanh nghiệp", "Enterprise")),
        ("perMonth", Entry::new("/tháng", "/month")),
        ("perYear", Entry::new("/năm", "/year")),
        ("choosePlan", Entry::new("Chọn gói", "Choose Plan")),
        // Plan features
        ("storage", Entry::new("Lưu trữ", "Storage")),
        ("credits", Entry::new("Tín dụng", "Credits")),
        ("connections", Entry::new("Kết nối mạng xã hội", "Social Media Connections")),
        ("support", Entry::new("Hỗ trợ", "Support")),
        // Call to action
        ("ctaTitle", Entry::new("Sẵn sàng tạo nội dung tuyệt vời?", "Ready to create amazing content?")),
        (
            "ctaSubtitle",
            Entry::new(
                "Đăng ký ngay hôm nay để bắt đầu tạo nội dung chất lượng cao",
                "Sign up today to start creating high-quality content",
            ),
        ),
        ("contactUs", Entry::new("Liên hệ với chúng tôi", "Contact Us")),
        // Shared
        ("language", Entry::new("Ngôn ngữ", "Language")),
        ("dismiss", Entry::new("Đóng", "Dismiss")),
        ("openMenu", Entry::new("Mở menu", "Open menu")),
        ("closeMenu", Entry::new("Đóng menu", "Close menu")),
        ("notFoundTitle", Entry::new("Không tìm thấy trang", "Page not found")),
        (
            "notFoundBody",
            Entry::new(
                "Trang bạn đang tìm không tồn tại hoặc đã được di chuyển.",
                "The page you are looking for does not exist or has been moved.",
            ),
        ),
        ("backHome", Entry::new("Về trang chủ", "Back to home")),
    ],
);
